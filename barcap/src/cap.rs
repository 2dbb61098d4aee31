// Copyright 2025 the Barcap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cap arcs and the primitive shapes the outline variants are composed from.
//!
//! All shapes live in a bar's local frame: `x` in `[0, width]`, y pointing down. Angles follow
//! the same y-down convention, so `0°` points along `+x`, `90°` along `+y` (down) and `270°`
//! straight up; positive sweeps turn clockwise on screen.

use kurbo::{Arc, BezPath, Circle, Point, Shape, Vec2};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// The arc of a convex cap, in degrees.
///
/// An unclipped cap is the upper semicircle: it starts at `180°` (the left end of the
/// diameter) and sweeps `180°` over the top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CapArc {
    /// Start angle in degrees.
    pub start_angle: f64,
    /// Sweep in degrees, in `[0, 180]`.
    pub sweep_angle: f64,
}

impl CapArc {
    /// The full upper semicircle.
    pub const SEMICIRCLE: Self = Self {
        start_angle: 180.0,
        sweep_angle: 180.0,
    };

    /// Returns the cap arc for a radius that overshoots the available height by `overshoot`.
    ///
    /// The arc is cut by a horizontal chord `overshoot` above the circle's center:
    /// `θ = asin(overshoot / radius)` and the arc runs from `180° + θ` over `180° - 2θ`. An
    /// overshoot of zero (or less) gives [`CapArc::SEMICIRCLE`]; an overshoot of a full radius
    /// or more collapses the arc onto the top point.
    pub fn clipped(radius: f64, overshoot: f64) -> Self {
        let theta = clip_angle(radius, overshoot);
        Self {
            start_angle: 180.0 + theta,
            sweep_angle: 180.0 - 2.0 * theta,
        }
    }

    /// Returns `true` if nothing was clipped off.
    pub fn is_semicircle(&self) -> bool {
        self.sweep_angle >= 180.0
    }

    /// Returns the clipping angle `θ` in degrees.
    pub fn clip_angle(&self) -> f64 {
        self.start_angle - 180.0
    }

    /// Returns the `kurbo` arc on the circle of `radius` centered at `(radius, radius)`.
    pub(crate) fn to_kurbo(self, radius: f64) -> Arc {
        Arc {
            center: Point::new(radius, radius),
            radii: Vec2::new(radius, radius),
            start_angle: self.start_angle.to_radians(),
            sweep_angle: self.sweep_angle.to_radians(),
            x_rotation: 0.0,
        }
    }
}

/// `asin(overshoot / radius)` in degrees, with the ratio clamped into `[0, 1]`.
fn clip_angle(radius: f64, overshoot: f64) -> f64 {
    if !(radius > 0.0) {
        return 90.0;
    }
    let ratio = (overshoot / radius).clamp(0.0, 1.0);
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.asin().to_degrees()
}

/// The closed circular segment under `arc`, for a bar of `width`.
pub(crate) fn cap_segment(width: f64, arc: CapArc, tolerance: f64) -> BezPath {
    let mut path = BezPath::new();
    path.extend(arc.to_kurbo(width * 0.5).path_elements(tolerance));
    path.close_path();
    path
}

/// An axis-aligned rectangle as a closed path, wound like the cap arcs.
///
/// The corners are not normalized, so a zero-height rectangle stays a (degenerate) subpath.
pub(crate) fn rect_path(x0: f64, y0: f64, x1: f64, y1: f64) -> BezPath {
    let mut p = BezPath::new();
    p.move_to((x0, y0));
    p.line_to((x1, y0));
    p.line_to((x1, y1));
    p.line_to((x0, y1));
    p.close_path();
    p
}

/// The full disk of the cap below, centered on the bar's base line at `center_y`.
pub(crate) fn notch_disk(width: f64, center_y: f64, tolerance: f64) -> BezPath {
    let r = width * 0.5;
    Circle::new((r, center_y), r).to_path(tolerance)
}

/// The lower half of the disk centered at `(width / 2, center_y)`, closed along its diameter.
pub(crate) fn lower_half_disk(width: f64, center_y: f64, tolerance: f64) -> BezPath {
    let r = width * 0.5;
    let arc = Arc {
        center: Point::new(r, center_y),
        radii: Vec2::new(r, r),
        start_angle: 0.0,
        sweep_angle: core::f64::consts::PI,
        x_rotation: 0.0,
    };
    let mut path = BezPath::new();
    path.extend(arc.path_elements(tolerance));
    path.close_path();
    path
}

/// The cutout that rounds a bar off at `bottom`.
///
/// This is the `width` square spanning `[bottom - r, bottom + r]` minus the lower half of the
/// circle whose lowest point touches `bottom`. Subtracting it from a bar leaves a convex end at
/// `bottom` and clears the `r` rows below it.
pub(crate) fn corner_cutout(width: f64, bottom: f64, tolerance: f64) -> BezPath {
    let r = width * 0.5;
    let square = rect_path(0.0, bottom - r, width, bottom + r);
    barcap_path::subtract(&square, &lower_half_disk(width, bottom - r, tolerance), tolerance)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn assert_close(a: f64, b: f64, eps: f64) {
        assert!((a - b).abs() <= eps, "{a} != {b} (eps {eps})");
    }

    #[test]
    fn no_overshoot_is_a_semicircle() {
        assert_eq!(CapArc::clipped(20.0, 0.0), CapArc::SEMICIRCLE);
        assert_eq!(CapArc::clipped(20.0, -5.0), CapArc::SEMICIRCLE);
        assert!(CapArc::clipped(20.0, 0.0).is_semicircle());
    }

    #[test]
    fn half_radius_overshoot_clips_thirty_degrees() {
        let arc = CapArc::clipped(20.0, 10.0);
        assert_close(arc.clip_angle(), 30.0, 1e-9);
        assert_close(arc.start_angle, 210.0, 1e-9);
        assert_close(arc.sweep_angle, 120.0, 1e-9);
        assert!(!arc.is_semicircle());
    }

    #[test]
    fn full_overshoot_collapses_the_arc() {
        let arc = CapArc::clipped(20.0, 20.0);
        assert_close(arc.sweep_angle, 0.0, 1e-9);
        // Ratios past one are clamped instead of leaving the asin domain.
        assert_eq!(CapArc::clipped(20.0, 35.0), arc);
    }

    #[test]
    fn semicircle_segment_spans_the_width() {
        let seg = cap_segment(40.0, CapArc::SEMICIRCLE, 0.01);
        let bb = seg.bounding_box();
        assert_close(bb.x0, 0.0, 1e-6);
        assert_close(bb.x1, 40.0, 1e-6);
        assert_close(bb.y0, 0.0, 0.01);
        assert_close(bb.y1, 20.0, 1e-6);
        assert_close(seg.area().abs(), core::f64::consts::PI * 200.0, 0.5);
    }

    #[test]
    fn clipped_segment_sits_on_its_chord() {
        let seg = cap_segment(40.0, CapArc::clipped(20.0, 10.0), 0.01);
        let bb = seg.bounding_box();
        // The chord is `overshoot` above the center.
        assert_close(bb.y1, 10.0, 1e-6);
        assert_close(bb.y0, 0.0, 0.01);
    }

    #[test]
    fn corner_cutout_is_a_square_minus_a_half_disk() {
        let cut = corner_cutout(40.0, 100.0, 0.01);
        let expected = 40.0 * 40.0 - core::f64::consts::PI * 400.0 / 2.0;
        assert_close(cut.area().abs(), expected, 1.0);
        let bb = cut.bounding_box();
        assert_close(bb.y0, 80.0, 1e-6);
        assert_close(bb.y1, 120.0, 1e-6);
        assert_ne!(cut.winding(Point::new(1.0, 99.0)), 0);
        assert_eq!(cut.winding(Point::new(20.0, 95.0)), 0);
        assert_ne!(cut.winding(Point::new(20.0, 110.0)), 0);
    }
}
