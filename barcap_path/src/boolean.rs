// Copyright 2025 the Barcap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boolean path operations.

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Vec2};
use smallvec::SmallVec;

use crate::arrangement::Arrangement;
use crate::contour::{Contour, contains, flatten_contours};

/// Default curve flattening tolerance, in path units.
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// Vertex welding distance, relative to the flattening tolerance.
const SNAP_RATIO: f64 = 1e-8;

/// A boolean operation on two filled regions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    /// Points inside either operand.
    Union,
    /// Points inside both operands.
    Intersect,
    /// Points inside the first operand but not the second.
    Difference,
    /// Points inside exactly one operand.
    Xor,
}

impl BooleanOp {
    fn apply(self, in_a: bool, in_b: bool) -> bool {
        match self {
            Self::Union => in_a || in_b,
            Self::Intersect => in_a && in_b,
            Self::Difference => in_a && !in_b,
            Self::Xor => in_a != in_b,
        }
    }
}

/// Computes `op` on the regions filled by `a` and `b` (nonzero rule).
///
/// Curves are flattened with `tolerance` first; a non-positive or non-finite tolerance falls
/// back to [`DEFAULT_TOLERANCE`]. The returned path contains one closed polyline per boundary
/// loop: outer boundaries and holes wind in opposite directions, so the result fills correctly
/// under both the nonzero and even-odd rules.
pub fn boolean(a: &BezPath, b: &BezPath, op: BooleanOp, tolerance: f64) -> BezPath {
    let tolerance = if tolerance.is_finite() && tolerance > 0.0 {
        tolerance
    } else {
        DEFAULT_TOLERANCE
    };
    let snap = tolerance * SNAP_RATIO;

    let a = flatten_contours(a, tolerance);
    let b = flatten_contours(b, tolerance);
    let arrangement = Arrangement::build(a.iter().chain(b.iter()), snap);
    let directed = boundary_edges(&arrangement, &a, &b, op, snap, tolerance);
    let loops = chain_loops(arrangement.vertices.len(), &directed);

    let mut out = BezPath::new();
    for lp in loops {
        let mut points: Vec<Point> = lp.iter().map(|&v| arrangement.vertices[v]).collect();
        drop_collinear(&mut points);
        let Some((&first, rest)) = points.split_first() else {
            continue;
        };
        if rest.len() < 2 {
            continue;
        }
        out.move_to(first);
        for &p in rest {
            out.line_to(p);
        }
        out.close_path();
    }
    out
}

/// Returns the region of `a` not covered by `b`.
pub fn subtract(a: &BezPath, b: &BezPath, tolerance: f64) -> BezPath {
    boolean(a, b, BooleanOp::Difference, tolerance)
}

/// Returns the region covered by `a` or `b`.
pub fn union(a: &BezPath, b: &BezPath, tolerance: f64) -> BezPath {
    boolean(a, b, BooleanOp::Union, tolerance)
}

/// Returns the region covered by both `a` and `b`.
pub fn intersect(a: &BezPath, b: &BezPath, tolerance: f64) -> BezPath {
    boolean(a, b, BooleanOp::Intersect, tolerance)
}

/// Returns the region covered by exactly one of `a` and `b`.
pub fn xor(a: &BezPath, b: &BezPath, tolerance: f64) -> BezPath {
    boolean(a, b, BooleanOp::Xor, tolerance)
}

/// Keeps the arrangement edges that bound the result, oriented with the result on the
/// left-hand normal `(-dy, dx)`.
fn boundary_edges(
    arrangement: &Arrangement,
    a: &[Contour],
    b: &[Contour],
    op: BooleanOp,
    snap: f64,
    tolerance: f64,
) -> Vec<(usize, usize)> {
    let inside = |p: Point| op.apply(contains(a, p), contains(b, p));
    let mut out = Vec::new();
    for &(u, v) in &arrangement.edges {
        let p0 = arrangement.vertices[u];
        let p1 = arrangement.vertices[v];
        let d = p1 - p0;
        let len = d.hypot();
        if len == 0.0 {
            continue;
        }
        let normal = Vec2::new(-d.y, d.x) / len;
        let probe = (len * 1e-4).clamp(snap * 100.0, tolerance * 1e-3);
        let mid = p0.midpoint(p1);
        let left = inside(mid + normal * probe);
        let right = inside(mid - normal * probe);
        match (left, right) {
            (true, false) => out.push((u, v)),
            (false, true) => out.push((v, u)),
            _ => {}
        }
    }
    out
}

/// Links directed edges into closed vertex loops.
///
/// Where several boundary loops touch at a vertex the pairing is arbitrary, which does not
/// change the filled region.
fn chain_loops(vertex_count: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let mut outgoing: Vec<SmallVec<[usize; 2]>> = alloc::vec![SmallVec::new(); vertex_count];
    for (i, &(from, _)) in edges.iter().enumerate() {
        outgoing[from].push(i);
    }
    let mut used = alloc::vec![false; edges.len()];
    let mut loops = Vec::new();
    for start in 0..edges.len() {
        if used[start] {
            continue;
        }
        let origin = edges[start].0;
        let mut lp = Vec::new();
        let mut current = start;
        loop {
            used[current] = true;
            let (from, to) = edges[current];
            lp.push(from);
            if to == origin {
                break;
            }
            match outgoing[to].iter().copied().find(|&e| !used[e]) {
                Some(next) => current = next,
                None => break,
            }
        }
        loops.push(lp);
    }
    loops
}

/// Removes vertices that sit on a straight run between their neighbors.
fn drop_collinear(points: &mut Vec<Point>) {
    let mut i = 0;
    while points.len() >= 3 && i < points.len() {
        let n = points.len();
        let prev = points[(i + n - 1) % n];
        let next = points[(i + 1) % n];
        let a = points[i] - prev;
        let b = next - points[i];
        if a.cross(b).abs() <= 1e-9 * a.hypot() * b.hypot() && a.dot(b) > 0.0 {
            points.remove(i);
            i = i.saturating_sub(1);
        } else {
            i += 1;
        }
    }
}
