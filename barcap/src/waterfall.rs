// Copyright 2025 the Barcap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waterfall chart layout: running totals, bands and one outline per bar.

use alloc::vec::Vec;

use kurbo::{BezPath, Rect};

use crate::axis::{LinearAxis, clamped_offset};
use crate::convex_concave_convex::ConvexConcaveConvexOutline;
use crate::error::OutlineError;
use crate::outline::{BarEntry, Outline};

/// Turns a sequence of deltas into waterfall entries.
///
/// Each bar starts at the running total of the deltas before it and ends after adding its own
/// delta, so a negative delta gives an inverted entry. Non-finite deltas contribute nothing and
/// produce a zero-length entry.
pub fn waterfall_entries(deltas: &[f64]) -> Vec<BarEntry> {
    let mut total = 0.0;
    deltas
        .iter()
        .map(|&delta| {
            let start = total;
            if delta.is_finite() {
                total += delta;
            }
            BarEntry::new(start, total)
        })
        .collect()
}

/// One laid out waterfall bar.
#[derive(Clone, Debug, PartialEq)]
pub struct WaterfallBar {
    /// Position of the bar in the series.
    pub index: usize,
    /// The bar's value range.
    pub entry: BarEntry,
    /// The bar's box in plot coordinates.
    pub frame: Rect,
    /// The outline in the bar's local frame (origin at `frame`'s top-left corner).
    pub outline: Outline,
}

impl WaterfallBar {
    /// Returns the outline moved into plot coordinates.
    pub fn placed_path(&self) -> BezPath {
        self.outline.translated(self.frame.origin().to_vec2())
    }
}

/// A waterfall chart of capped bars.
///
/// Bars sit on equal bands across the plot. The value axis covers every running total and zero,
/// with larger values towards the top of the plot.
#[derive(Clone, Debug, PartialEq)]
pub struct WaterfallSpec {
    /// The per-bar deltas.
    pub deltas: Vec<f64>,
    /// Padding between bands, in band units.
    pub padding_inner: f64,
    /// Padding before the first and after the last band, in band units.
    pub padding_outer: f64,
    /// Flattening tolerance for the bar outlines, in pixels.
    pub tolerance: f64,
}

impl WaterfallSpec {
    /// Creates a waterfall over `deltas` with default padding.
    pub fn new(deltas: impl Into<Vec<f64>>) -> Self {
        Self {
            deltas: deltas.into(),
            padding_inner: 0.2,
            padding_outer: 0.1,
            tolerance: barcap_path::DEFAULT_TOLERANCE,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Sets the flattening tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the bar entries (see [`waterfall_entries`]).
    pub fn entries(&self) -> Vec<BarEntry> {
        waterfall_entries(&self.deltas)
    }

    /// Returns the value axis: every running total plus zero.
    pub fn axis(&self) -> LinearAxis {
        let entries = self.entries();
        LinearAxis::covering(entries.iter().flat_map(|e| [e.y_min, e.y_max]))
    }

    /// Lays the bars out inside `plot` and builds their outlines.
    ///
    /// Fails with [`OutlineError::InvalidGeometry`] when the plot is too narrow to give the
    /// bands any width.
    pub fn layout(&self, plot: Rect) -> Result<Vec<WaterfallBar>, OutlineError> {
        let entries = self.entries();
        let axis = self.axis();
        let plot = plot.abs();
        let band = Band::new(
            (plot.x0, plot.x1),
            entries.len(),
            self.padding_inner,
            self.padding_outer,
        );
        let generator = ConvexConcaveConvexOutline::new(axis).with_tolerance(self.tolerance);

        let mut bars = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let x = band.x(index);
            let lo = clamped_offset(&axis, entry.y_min.min(entry.y_max));
            let hi = clamped_offset(&axis, entry.y_min.max(entry.y_max));
            let frame = Rect::new(
                x,
                plot.y1 - hi * plot.height(),
                x + band.width(),
                plot.y1 - lo * plot.height(),
            );
            let outline = generator.outline(frame.size(), entry, index)?;
            bars.push(WaterfallBar {
                index,
                entry,
                frame,
                outline,
            });
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(bars = bars.len(), "laid out waterfall");
        Ok(bars)
    }
}

/// Equal bands over a horizontal range, with padding in band units.
#[derive(Clone, Copy, Debug)]
struct Band {
    start: f64,
    width: f64,
    step: f64,
    padding_outer: f64,
}

impl Band {
    fn new(range: (f64, f64), count: usize, padding_inner: f64, padding_outer: f64) -> Self {
        let span = (range.1 - range.0).abs();
        let n = count as f64;
        let denom = n + padding_inner * (n - 1.0) + 2.0 * padding_outer;
        let width = if n <= 0.0 || denom <= 0.0 {
            0.0
        } else {
            span / denom
        };
        Self {
            start: range.0.min(range.1),
            width,
            step: width * (1.0 + padding_inner),
            padding_outer,
        }
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn x(&self, index: usize) -> f64 {
        self.start + self.width * self.padding_outer + self.step * index as f64
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::{Point, Shape};

    use super::*;
    use crate::plane_convex::BiConvexOutline;

    fn assert_close(a: f64, b: f64, eps: f64) {
        assert!((a - b).abs() <= eps, "{a} != {b} (eps {eps})");
    }

    #[test]
    fn entries_are_running_totals() {
        let entries = waterfall_entries(&[10.0, -4.0, f64::NAN, 6.0]);
        assert_eq!(
            entries,
            [
                BarEntry::new(0.0, 10.0),
                BarEntry::new(10.0, 6.0),
                BarEntry::new(6.0, 6.0),
                BarEntry::new(6.0, 12.0),
            ]
        );
        assert!(entries[1].is_inverted());
    }

    #[test]
    fn axis_covers_totals_and_zero() {
        let spec = WaterfallSpec::new([-5.0, 20.0, -3.0]);
        let axis = spec.axis();
        assert_eq!((axis.domain_min(), axis.domain_max()), (-5.0, 15.0));
    }

    #[test]
    fn bands_split_the_plot() {
        let spec = WaterfallSpec::new([40.0, 30.0, -20.0, 50.0]).with_padding(0.0, 0.0);
        let plot = Rect::new(0.0, 0.0, 400.0, 300.0);
        let bars = spec.layout(plot).unwrap();
        assert_eq!(bars.len(), 4);
        for (i, bar) in bars.iter().enumerate() {
            assert_eq!(bar.index, i);
            assert_close(bar.frame.x0, 100.0 * i as f64, 1e-9);
            assert_close(bar.frame.width(), 100.0, 1e-9);
        }
        // Axis 0..100 over 300px.
        assert_close(bars[0].frame.y0, 180.0, 1e-9);
        assert_close(bars[0].frame.y1, 300.0, 1e-9);
        assert_close(bars[2].frame.y0, 90.0, 1e-9);
        assert_close(bars[2].frame.y1, 150.0, 1e-9);
        assert_close(bars[3].frame.y0, 0.0, 1e-9);
    }

    #[test]
    fn first_bar_is_a_capsule() {
        let spec = WaterfallSpec::new([60.0, 40.0]).with_tolerance(0.05);
        let bars = spec.layout(Rect::new(0.0, 0.0, 200.0, 200.0)).unwrap();
        let first = &bars[0];
        let capsule = BiConvexOutline::new()
            .with_tolerance(0.05)
            .outline(first.frame.size())
            .unwrap();
        assert_eq!(first.outline, capsule);
    }

    #[test]
    fn falling_bar_back_to_zero_keeps_its_rounded_end() {
        let spec = WaterfallSpec::new([50.0, -50.0]).with_tolerance(0.05);
        let bars = spec.layout(Rect::new(0.0, 0.0, 200.0, 200.0)).unwrap();
        let falling = &bars[1];
        assert_eq!(falling.entry, BarEntry::new(50.0, 0.0));

        let height = falling.frame.height();
        let bb = falling.outline.bounding_box().unwrap();
        assert_close(bb.y1, height, 0.05);
        let corner = Point::new(1.0, height - 1.0);
        assert_eq!(falling.outline.path().winding(corner), 0);
    }

    #[test]
    fn placed_paths_stay_inside_their_frames() {
        let spec = WaterfallSpec::new([40.0, 30.0, -20.0, 50.0]).with_tolerance(0.05);
        let bars = spec.layout(Rect::new(10.0, 20.0, 410.0, 320.0)).unwrap();
        for bar in &bars {
            let bb = bar.placed_path().bounding_box();
            let frame = bar.frame.inflate(0.05, 0.05);
            assert!(frame.contains(bb.origin()), "{bb:?} outside {frame:?}");
            assert!(frame.contains(Point::new(bb.x1, bb.y1)), "{bb:?} outside {frame:?}");
        }
    }

    #[test]
    fn zero_delta_is_an_empty_bar() {
        let bars = WaterfallSpec::new([10.0, 0.0, 5.0])
            .layout(Rect::new(0.0, 0.0, 300.0, 100.0))
            .unwrap();
        assert!(bars[1].outline.is_empty());
        assert!(!bars[2].outline.is_empty());
    }

    #[test]
    fn empty_and_too_narrow_plots() {
        let none = WaterfallSpec::new(Vec::<f64>::new()).layout(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(none, Ok(Vec::new()));
        let narrow = WaterfallSpec::new([1.0, 2.0]).layout(Rect::new(5.0, 0.0, 5.0, 100.0));
        assert!(matches!(narrow, Err(OutlineError::InvalidGeometry { .. })));
    }
}
