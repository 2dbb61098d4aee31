// Copyright 2025 the Barcap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized positions of data values along the value axis.

/// Maps a raw data value to its normalized position along the rendered value axis.
///
/// `0.0` is one end of the axis extent and `1.0` the other. Generators clamp whatever this
/// returns into `[0, 1]`, so implementations may extrapolate freely.
///
/// Implemented for any `Fn(f64) -> f64`, so a host axis model can be passed as a closure.
pub trait AxisOffset {
    /// Returns the normalized offset of `value`.
    fn offset(&self, value: f64) -> f64;
}

impl<F> AxisOffset for F
where
    F: Fn(f64) -> f64,
{
    fn offset(&self, value: f64) -> f64 {
        self(value)
    }
}

/// A linear mapping from a data domain onto `[0, 1]`.
///
/// `domain.0` maps to `0.0` and `domain.1` to `1.0`; a reversed domain flips the axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearAxis {
    domain: (f64, f64),
}

impl LinearAxis {
    /// Creates an axis over `domain`.
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain }
    }

    /// Creates an axis spanning `values` and zero.
    ///
    /// Non-finite values are ignored. Bars grow from the zero line, so it is always inside the
    /// domain.
    pub fn covering(values: impl IntoIterator<Item = f64>) -> Self {
        let mut min = 0.0_f64;
        let mut max = 0.0_f64;
        for v in values {
            if !v.is_finite() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
        }
        Self::new((min, max))
    }

    /// Returns the same axis with its direction flipped.
    pub fn reversed(self) -> Self {
        Self::new((self.domain.1, self.domain.0))
    }

    /// Returns the value that maps to `0.0`.
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the value that maps to `1.0`.
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }
}

impl AxisOffset for LinearAxis {
    fn offset(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let denom = d1 - d0;
        if denom == 0.0 {
            return 0.0;
        }
        (value - d0) / denom
    }
}

/// Returns `axis.offset(value)` clamped into `[0, 1]`. `NaN` passes through.
pub(crate) fn clamped_offset<A: AxisOffset + ?Sized>(axis: &A, value: f64) -> f64 {
    axis.offset(value).clamp(0.0, 1.0)
}
