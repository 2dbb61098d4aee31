// Copyright 2025 the Barcap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The outline artifact handed to renderers, and the value range it is built from.

#[cfg(feature = "std")]
use alloc::string::String;

use kurbo::{Affine, BezPath, Rect, Shape, Size, Vec2};

/// The raw value range of one bar.
///
/// `y_max < y_min` flags an inverted bar (a decrease in a waterfall chart).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BarEntry {
    /// Value where the bar starts.
    pub y_min: f64,
    /// Value where the bar ends (the capped end).
    pub y_max: f64,
}

impl BarEntry {
    /// Creates an entry spanning `y_min..y_max`.
    pub fn new(y_min: f64, y_max: f64) -> Self {
        Self { y_min, y_max }
    }

    /// Returns `true` if the bar runs in the negative direction.
    pub fn is_inverted(&self) -> bool {
        self.y_max < self.y_min
    }

    /// Returns the entry with its ends swapped.
    pub fn swapped(self) -> Self {
        Self::new(self.y_max, self.y_min)
    }
}

/// A closed outline in a bar's local frame, ready to fill, stroke or clip.
///
/// The wrapped path may hold several subpaths; renderers should fill it with the nonzero rule.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outline {
    path: BezPath,
}

impl Outline {
    /// An outline with no geometry.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps an existing path.
    pub fn from_path(path: BezPath) -> Self {
        Self { path }
    }

    /// Returns the underlying path.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Consumes the outline, returning the underlying path.
    pub fn into_path(self) -> BezPath {
        self.path
    }

    /// Returns `true` if the outline has no path elements at all.
    pub fn is_empty(&self) -> bool {
        self.path.elements().is_empty()
    }

    /// Returns the tight bounding box of the path, or `None` for an empty outline.
    pub fn bounding_box(&self) -> Option<Rect> {
        (!self.is_empty()).then(|| self.path.bounding_box())
    }

    /// Returns the filled area.
    pub fn area(&self) -> f64 {
        self.path.area().abs()
    }

    /// Returns the path translated by `offset`, e.g. into plot coordinates.
    pub fn translated(&self, offset: Vec2) -> BezPath {
        Affine::translate(offset) * self.path.clone()
    }

    /// Returns the path as SVG path data.
    #[cfg(feature = "std")]
    pub fn to_svg(&self) -> String {
        self.path.to_svg()
    }

    /// Appends the subpaths of `other`.
    pub(crate) fn append(&mut self, other: &BezPath) {
        self.path.extend(other.iter());
    }

    /// Removes the region covered by `cutout`.
    pub(crate) fn subtract(&self, cutout: &BezPath, tolerance: f64) -> Self {
        Self::from_path(barcap_path::subtract(&self.path, cutout, tolerance))
    }

    /// Turns the outline upside down within a box of `size`.
    pub(crate) fn invert(&mut self, size: Size) {
        self.path.apply_affine(half_turn(size));
    }
}

impl From<Outline> for BezPath {
    fn from(outline: Outline) -> Self {
        outline.path
    }
}

/// A 180° rotation about the center of a `size` box: `(x, y) -> (w - x, h - y)`.
fn half_turn(size: Size) -> Affine {
    Affine::new([-1.0, 0.0, 0.0, -1.0, size.width, size.height])
}
