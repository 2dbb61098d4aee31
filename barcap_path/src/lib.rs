// Copyright 2025 the Barcap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boolean operations on `kurbo` paths.
//!
//! Operands are flattened into polygonal contours and filled with the nonzero rule. The result
//! is built from the planar arrangement of both operands' edges:
//! - edges are split at crossings, T-junctions and collinear overlaps,
//! - nearby vertices are welded together,
//! - each edge is kept only if it separates "inside the result" from "outside the result".
//!
//! Results contain only straight segments; curves survive as their flattened polylines.
//! Coincident edges between the operands are handled, which is the common case when
//! composing shapes that share sides.

#![no_std]

extern crate alloc;

mod arrangement;
mod boolean;
mod contour;

pub use boolean::{BooleanOp, DEFAULT_TOLERANCE, boolean, intersect, subtract, union, xor};
