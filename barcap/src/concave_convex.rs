// Copyright 2025 the Barcap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked segments: a convex cap on top and a concave notch at the base.

use kurbo::Size;

use crate::axis::{AxisOffset, clamped_offset};
use crate::cap::{CapArc, cap_segment, notch_disk, rect_path};
use crate::error::{OutlineError, validate};
use crate::outline::{BarEntry, Outline};

/// Pixel distances of a bar's two ends from the zero line.
///
/// Offsets are converted to pixels with the ratio `height / |offset(y_max) - offset(y_min)|`,
/// so a bar whose range starts at zero has `y_max == height`. Both heights are magnitudes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZeroHeights {
    /// Distance of `entry.y_min` from the zero line, in pixels.
    pub y_min: f64,
    /// Distance of `entry.y_max` from the zero line, in pixels.
    pub y_max: f64,
}

impl ZeroHeights {
    /// Computes the zero-relative heights of `entry` for a bar of `height` pixels.
    ///
    /// Returns `None` when the entry spans no distance along the axis, or when the axis yields
    /// a non-finite offset.
    pub fn compute<A>(axis: &A, height: f64, entry: BarEntry) -> Option<Self>
    where
        A: AxisOffset + ?Sized,
    {
        let zero = clamped_offset(axis, 0.0);
        let min = clamped_offset(axis, entry.y_min);
        let max = clamped_offset(axis, entry.y_max);
        if !(zero.is_finite() && min.is_finite() && max.is_finite()) || max == min {
            return None;
        }
        let ratio = height / (max - min).abs();
        Some(Self {
            y_min: ratio * (min - zero).abs(),
            y_max: ratio * (max - zero).abs(),
        })
    }

    /// How far the cap radius reaches past the capped end's zero height.
    pub fn max_overshoot(&self, radius: f64) -> f64 {
        (radius - self.y_max).max(0.0)
    }

    /// How far the cap radius reaches past the starting end's zero height.
    pub fn min_overshoot(&self, radius: f64) -> f64 {
        (radius - self.y_min).max(0.0)
    }
}

/// A segment of a stacked bar: convex on top, with a concave notch carved into its base so the
/// cap of the segment below nests into it.
///
/// The cap and the body are sized from the entry's distance to the zero line, so short
/// segments near zero get clipped caps. Inverted entries (`y_max < y_min`) are drawn upside
/// down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConcaveConvexOutline<A> {
    /// Maps raw values to normalized axis offsets.
    pub axis: A,
    /// Flattening tolerance for arcs and boolean operations, in pixels.
    pub tolerance: f64,
}

impl<A: AxisOffset> ConcaveConvexOutline<A> {
    /// Creates a generator over `axis` with [`DEFAULT_TOLERANCE`](crate::DEFAULT_TOLERANCE).
    pub fn new(axis: A) -> Self {
        Self {
            axis,
            tolerance: barcap_path::DEFAULT_TOLERANCE,
        }
    }

    /// Sets the flattening tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the zero-relative heights of `entry`, or `None` for a degenerate range.
    ///
    /// An inverted entry is measured with its ends swapped: these are the heights of the upright
    /// shape that gets turned over.
    pub fn zero_heights(&self, size: Size, entry: BarEntry) -> Option<ZeroHeights> {
        let upright = if entry.is_inverted() {
            entry.swapped()
        } else {
            entry
        };
        ZeroHeights::compute(&self.axis, size.height, upright)
    }

    /// Returns the arc of the top cap, or `None` for a degenerate range.
    pub fn cap_arc(&self, size: Size, entry: BarEntry) -> Option<CapArc> {
        let r = size.width * 0.5;
        self.zero_heights(size, entry)
            .map(|heights| CapArc::clipped(r, heights.max_overshoot(r)))
    }

    /// Builds the outline for a bar of `size` spanning `entry`.
    ///
    /// A degenerate range (both ends at the same axis offset) gives an empty outline. An
    /// inverted entry gives the half-turn of the outline for the swapped entry.
    pub fn outline(&self, size: Size, entry: BarEntry) -> Result<Outline, OutlineError> {
        validate(size)?;
        let Some(heights) = self.zero_heights(size, entry) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(y_min = entry.y_min, y_max = entry.y_max, "degenerate bar range");
            return Ok(Outline::empty());
        };
        let mut outline = upright(size, heights, self.tolerance);
        if entry.is_inverted() {
            outline.invert(size);
        }
        Ok(outline)
    }
}

/// The non-inverted concave-convex outline.
///
/// Both pieces have the notch disk (centered on the base line) removed: the clipped cap, and the
/// body from `y = r` down to the starting end's height.
pub(crate) fn upright(size: Size, heights: ZeroHeights, tolerance: f64) -> Outline {
    let Size { width, height } = size;
    let r = width * 0.5;
    let notch = notch_disk(width, height, tolerance);

    let cap = cap_segment(width, CapArc::clipped(r, heights.max_overshoot(r)), tolerance);
    let mut outline = Outline::from_path(cap).subtract(&notch, tolerance);

    let body_bottom = (height - heights.min_overshoot(r)).max(0.0);
    if body_bottom > r {
        let body = rect_path(0.0, r, width, body_bottom);
        outline.append(Outline::from_path(body).subtract(&notch, tolerance).path());
    }
    outline
}
