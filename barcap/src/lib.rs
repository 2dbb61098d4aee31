// Copyright 2025 the Barcap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vector outlines for bar-chart bars with rounded caps.
//!
//! Every generator is a pure function of the bar's pixel size (and, for the stacked variants,
//! its value range and an [`AxisOffset`] mapping). Outlines are returned in the bar's local
//! frame: origin at the top-left corner, y pointing down, `x` in `[0, width]`. The cap radius
//! is always `width / 2`.
//!
//! - [`PlaneConvexOutline`]: a rectangle with a convex cap on top.
//! - [`BiConvexOutline`]: the capsule sibling, convex at both ends.
//! - [`ConcaveConvexOutline`]: convex cap on top and a concave notch at the base, sized from
//!   the data values so stacked segments nest.
//! - [`ConvexConcaveConvexOutline`]: the waterfall variant; adds a convex cutout where the bar
//!   meets the zero line and renders the first bar of a series as a capsule.
//!
//! [`WaterfallSpec`] lays a series of deltas out on equal bands and builds one waterfall outline
//! per bar.
//!
//! Bars whose `y_max < y_min` are drawn as the half-turn (about the bar center) of the same bar
//! with its ends swapped.
//! Path composition goes through [`barcap_path`]'s boolean operations.
//!
//! ## Features
//!
//! - `libm` (default): `no_std` float math.
//! - `std`: float math from the standard library, and `Outline::to_svg`.
//! - `tracing`: `debug!` events for rejected sizes, degenerate ranges and waterfall layouts.
//!
//! The test suite is meant to pass both with default features and with `--all-features`.

#![no_std]

extern crate alloc;

mod axis;
mod cap;
mod concave_convex;
mod convex_concave_convex;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod outline;
mod plane_convex;
mod waterfall;

pub use axis::{AxisOffset, LinearAxis};
pub use barcap_path::DEFAULT_TOLERANCE;
pub use cap::CapArc;
pub use concave_convex::{ConcaveConvexOutline, ZeroHeights};
pub use convex_concave_convex::ConvexConcaveConvexOutline;
pub use error::OutlineError;
pub use kurbo::Size;
pub use outline::{BarEntry, Outline};
pub use plane_convex::{BiConvexOutline, PlaneConvexOutline};
pub use waterfall::{WaterfallBar, WaterfallSpec, waterfall_entries};
