// Copyright 2025 the Barcap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bars with a convex cap on top, and their capsule sibling.

use kurbo::Size;

use crate::cap::{CapArc, cap_segment, corner_cutout, rect_path};
use crate::error::{OutlineError, validate};
use crate::outline::Outline;

/// A rectangle with one rounded (convex) end.
///
/// The cap radius is `width / 2`. When the bar is shorter than its radius the cap is clipped by
/// a chord at the bar's height instead of overflowing it; see [`CapArc::clipped`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneConvexOutline {
    /// Flattening tolerance for the cap arc, in pixels.
    pub tolerance: f64,
}

impl Default for PlaneConvexOutline {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaneConvexOutline {
    /// Creates a generator with [`DEFAULT_TOLERANCE`](crate::DEFAULT_TOLERANCE).
    pub fn new() -> Self {
        Self {
            tolerance: barcap_path::DEFAULT_TOLERANCE,
        }
    }

    /// Sets the flattening tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the cap arc used for a bar of `size`.
    pub fn cap_arc(&self, size: Size) -> CapArc {
        let r = size.width * 0.5;
        CapArc::clipped(r, (r - size.height).max(0.0))
    }

    /// Builds the outline for a bar of `size`.
    ///
    /// The bounding box is `(0, 0, width, max(height, width / 2))`.
    pub fn outline(&self, size: Size) -> Result<Outline, OutlineError> {
        validate(size)?;
        Ok(plane_convex(size, self.tolerance))
    }
}

/// A capsule: convex at both ends.
///
/// This is the [`PlaneConvexOutline`] with its bottom corners rounded off by a second
/// semicircle of the same radius. Waterfall charts draw their first bar this way.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BiConvexOutline {
    /// Flattening tolerance for the cap arcs, in pixels.
    pub tolerance: f64,
}

impl Default for BiConvexOutline {
    fn default() -> Self {
        Self::new()
    }
}

impl BiConvexOutline {
    /// Creates a generator with [`DEFAULT_TOLERANCE`](crate::DEFAULT_TOLERANCE).
    pub fn new() -> Self {
        Self {
            tolerance: barcap_path::DEFAULT_TOLERANCE,
        }
    }

    /// Sets the flattening tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Builds the outline for a bar of `size`.
    pub fn outline(&self, size: Size) -> Result<Outline, OutlineError> {
        validate(size)?;
        Ok(bi_convex(size, self.tolerance))
    }
}

/// The body rectangle from `y = r` down to the base, then the (possibly clipped) cap.
///
/// The body is emitted even when it has no height, so the outline always spans the full width.
pub(crate) fn plane_convex(size: Size, tolerance: f64) -> Outline {
    let Size { width, height } = size;
    let r = width * 0.5;
    let body_height = (height - r).max(0.0);
    let mut outline = Outline::from_path(rect_path(0.0, r, width, r + body_height));
    let arc = CapArc::clipped(r, (r - height).max(0.0));
    outline.append(&cap_segment(width, arc, tolerance));
    outline
}

pub(crate) fn bi_convex(size: Size, tolerance: f64) -> Outline {
    let cutout = corner_cutout(size.width, size.height, tolerance);
    plane_convex(size, tolerance).subtract(&cutout, tolerance)
}
