// Copyright 2025 the Barcap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waterfall bars: concave-convex segments with a convex end at the zero line.

use kurbo::Size;

use crate::axis::AxisOffset;
use crate::cap::corner_cutout;
use crate::concave_convex::{ConcaveConvexOutline, ZeroHeights, upright};
use crate::error::{OutlineError, validate};
use crate::outline::{BarEntry, Outline};
use crate::plane_convex::bi_convex;

/// The waterfall bar outline.
///
/// Bars after the first are [`ConcaveConvexOutline`]s rounded off where the capped end's zero
/// height falls, so the bar also bulges at that boundary. The `width / 2` rows below that height
/// are cleared, which leaves a gap on bars that cross zero. The first bar of a
/// series has nothing to nest against and is drawn as a capsule (see
/// [`BiConvexOutline`](crate::BiConvexOutline)).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvexConcaveConvexOutline<A> {
    inner: ConcaveConvexOutline<A>,
}

impl<A: AxisOffset> ConvexConcaveConvexOutline<A> {
    /// Creates a generator over `axis` with [`DEFAULT_TOLERANCE`](crate::DEFAULT_TOLERANCE).
    pub fn new(axis: A) -> Self {
        Self::from_concave_convex(ConcaveConvexOutline::new(axis))
    }

    /// Wraps an existing concave-convex generator, keeping its axis and tolerance.
    pub fn from_concave_convex(inner: ConcaveConvexOutline<A>) -> Self {
        Self { inner }
    }

    /// Sets the flattening tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.inner.tolerance = tolerance;
        self
    }

    /// Returns the wrapped concave-convex generator.
    pub fn inner(&self) -> &ConcaveConvexOutline<A> {
        &self.inner
    }

    /// Builds the outline of the bar at `index` in its series.
    ///
    /// A degenerate range gives an empty outline, whatever the index. Inverted entries are built
    /// from the swapped entry and then turned upside down.
    pub fn outline(
        &self,
        size: Size,
        entry: BarEntry,
        index: usize,
    ) -> Result<Outline, OutlineError> {
        validate(size)?;
        let Some(heights) = self.inner.zero_heights(size, entry) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                index,
                y_min = entry.y_min,
                y_max = entry.y_max,
                "degenerate waterfall bar range"
            );
            return Ok(Outline::empty());
        };
        let mut outline = if index == 0 {
            bi_convex(size, self.inner.tolerance)
        } else {
            self.carved(size, heights)
        };
        if entry.is_inverted() {
            outline.invert(size);
        }
        Ok(outline)
    }

    fn carved(&self, size: Size, heights: ZeroHeights) -> Outline {
        let tolerance = self.inner.tolerance;
        let cutout = corner_cutout(size.width, heights.y_max, tolerance);
        upright(size, heights, tolerance).subtract(&cutout, tolerance)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::{Point, Shape};

    use super::*;
    use crate::axis::LinearAxis;

    fn inside(outline: &Outline, p: Point) -> bool {
        outline.path().winding(p) != 0
    }

    #[test]
    fn first_bar_ignores_the_range() {
        let ccc = ConvexConcaveConvexOutline::new(LinearAxis::new((0.0, 200.0)));
        let size = Size::new(40.0, 100.0);
        let a = ccc.outline(size, BarEntry::new(0.0, 100.0), 0).unwrap();
        let b = ccc.outline(size, BarEntry::new(60.0, 160.0), 0).unwrap();
        assert_eq!(a, b);
    }

    /// offset(0) = 0.5, offset(-40) = 0.1, offset(5) = 0.55: the capped end sits 100/9 px
    /// from the zero line.
    fn zero_crossing() -> (fn(f64) -> f64, Size, BarEntry) {
        (|v| (v + 50.0) / 100.0, Size::new(40.0, 100.0), BarEntry::new(-40.0, 5.0))
    }

    #[test]
    fn later_bars_are_rounded_at_the_zero_height() {
        let (axis, size, entry) = zero_crossing();
        let cc = ConcaveConvexOutline::new(axis).with_tolerance(0.01);
        let ccc = ConvexConcaveConvexOutline::from_concave_convex(cc);
        let plain = cc.outline(size, entry).unwrap();
        let carved = ccc.outline(size, entry, 1).unwrap();

        assert!(inside(&plain, Point::new(5.0, 10.0)));
        assert!(!inside(&carved, Point::new(5.0, 10.0)), "corner is rounded off");
        for p in [Point::new(20.0, 5.0), Point::new(1.0, 50.0)] {
            assert!(inside(&plain, p));
            assert!(inside(&carved, p));
        }
        assert!(carved.area() < plain.area());
    }

    #[test]
    fn carving_clears_a_radius_below_the_zero_height() {
        let (axis, size, entry) = zero_crossing();
        let cc = ConcaveConvexOutline::new(axis).with_tolerance(0.01);
        let ccc = ConvexConcaveConvexOutline::from_concave_convex(cc);
        let plain = cc.outline(size, entry).unwrap();
        let carved = ccc.outline(size, entry, 1).unwrap();
        let z = cc.zero_heights(size, entry).unwrap().y_max;

        // The body rows in `(Z, Z + r)` go, the body below them stays.
        for y in [z + 10.0, z + 15.0, z + 19.0] {
            for x in [1.0, 20.0, 39.0] {
                assert!(inside(&plain, Point::new(x, y)), "({x}, {y})");
                assert!(!inside(&carved, Point::new(x, y)), "({x}, {y})");
            }
        }
        assert!(inside(&carved, Point::new(20.0, z + 21.0)));
        assert!(carved.bounding_box().unwrap().y1 > z + 20.0);

        // At least the full-width band from `y = r` down to `Z + r` is lost.
        let lost = plain.area() - carved.area();
        let band = 40.0 * (z + 20.0 - 20.0);
        assert!(lost > band - 1.0, "lost {lost}, band {band}");
    }

    #[test]
    fn inverted_bar_is_the_half_turn_of_the_swapped_bar() {
        let ccc = ConvexConcaveConvexOutline::new(LinearAxis::new((0.0, 100.0)));
        let ccc = ccc.with_tolerance(0.01);
        let size = Size::new(40.0, 100.0);
        for index in [0, 1, 4] {
            let down = ccc.outline(size, BarEntry::new(30.0, 0.0), index).unwrap();
            let mut expected = ccc.outline(size, BarEntry::new(0.0, 30.0), index).unwrap();
            expected.invert(size);
            assert_eq!(down, expected);
            // The rounded end sits on the zero line at the bottom.
            assert!((down.bounding_box().unwrap().y1 - 100.0).abs() < 0.01);
            assert!(!inside(&down, Point::new(1.0, 99.0)));
        }
    }

    #[test]
    fn carving_is_idempotent() {
        let (axis, size, entry) = zero_crossing();
        let ccc = ConvexConcaveConvexOutline::new(axis).with_tolerance(0.05);
        let heights = ccc.inner().zero_heights(size, entry).unwrap();
        let once = ccc.outline(size, entry, 3).unwrap();
        let cutout = corner_cutout(size.width, heights.y_max, 0.05);
        let twice = once.subtract(&cutout, 0.05);
        assert!((once.area() - twice.area()).abs() < 1e-6);
        let (a, b) = (once.bounding_box().unwrap(), twice.bounding_box().unwrap());
        assert!((a.x0 - b.x0).abs() < 1e-6 && (a.y0 - b.y0).abs() < 1e-6);
        assert!((a.x1 - b.x1).abs() < 1e-6 && (a.y1 - b.y1).abs() < 1e-6);
    }

    #[test]
    fn degenerate_range_is_empty_at_every_index() {
        let ccc = ConvexConcaveConvexOutline::new(LinearAxis::new((0.0, 100.0)));
        let size = Size::new(40.0, 100.0);
        for index in [0, 1, 7] {
            let outline = ccc.outline(size, BarEntry::new(42.0, 42.0), index).unwrap();
            assert!(outline.is_empty());
        }
    }

    #[test]
    fn from_concave_convex_keeps_the_tolerance() {
        let cc = ConcaveConvexOutline::new(LinearAxis::new((0.0, 1.0))).with_tolerance(0.25);
        let ccc = ConvexConcaveConvexOutline::from_concave_convex(cc);
        assert_eq!(ccc.inner().tolerance, 0.25);
        assert_eq!(ccc.with_tolerance(0.5).inner().tolerance, 0.5);
    }
}
