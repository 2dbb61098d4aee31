// Copyright 2025 the Barcap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar arrangement of polygon edges.
//!
//! All input edges are split wherever they meet another edge (proper crossings, an endpoint
//! resting on the other edge, collinear overlaps). Split points are welded onto a shared vertex
//! list, so two operands that share a side end up sharing the exact same edge.

use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use kurbo::{Point, Rect};
use smallvec::SmallVec;

use crate::contour::Contour;

/// A straight edge between two points.
#[derive(Clone, Copy, Debug)]
struct Segment {
    p0: Point,
    p1: Point,
}

impl Segment {
    fn bounds(&self) -> Rect {
        Rect::from_points(self.p0, self.p1)
    }

    /// Parameter of `p` along this segment, if `p` lies within `snap` of its interior.
    fn interior_param(&self, p: Point, snap: f64) -> Option<f64> {
        if p.distance(self.p0) <= snap || p.distance(self.p1) <= snap {
            return None;
        }
        let d = self.p1 - self.p0;
        let len2 = d.hypot2();
        if len2 == 0.0 {
            return None;
        }
        let t = (p - self.p0).dot(d) / len2;
        if !(0.0..=1.0).contains(&t) {
            return None;
        }
        let closest = self.p0 + d * t;
        (closest.distance(p) <= snap).then_some(t)
    }
}

/// Welded edges of one or more sets of contours.
#[derive(Debug, Default)]
pub(crate) struct Arrangement {
    /// Welded vertex positions.
    pub(crate) vertices: Vec<Point>,
    /// Undirected unique edges as vertex index pairs, in discovery order.
    pub(crate) edges: Vec<(usize, usize)>,
}

impl Arrangement {
    /// Builds the arrangement of every edge in `contours`.
    ///
    /// Points closer than `snap` are treated as the same vertex.
    pub(crate) fn build<'a>(contours: impl IntoIterator<Item = &'a Contour>, snap: f64) -> Self {
        let mut segments = Vec::new();
        for contour in contours {
            let n = contour.len();
            for i in 0..n {
                let seg = Segment {
                    p0: contour[i],
                    p1: contour[(i + 1) % n],
                };
                if seg.p0.distance(seg.p1) > snap {
                    segments.push(seg);
                }
            }
        }

        let mut splits: Vec<Vec<(f64, Point)>> = alloc::vec![Vec::new(); segments.len()];
        let bounds: Vec<Rect> = segments
            .iter()
            .map(|s| s.bounds().inflate(snap, snap))
            .collect();
        for i in 0..segments.len() {
            for j in (i + 1)..segments.len() {
                if !overlaps(bounds[i], bounds[j]) {
                    continue;
                }
                split_pair(&segments, i, j, snap, &mut splits);
            }
        }

        let mut welder = Welder::new(snap);
        let mut seen = HashSet::new();
        let mut edges = Vec::new();
        for (seg, cuts) in segments.iter().zip(splits.iter_mut()) {
            cuts.sort_by(|a, b| a.0.total_cmp(&b.0));
            let mut prev = welder.weld(seg.p0);
            let rest = cuts.iter().map(|&(_, p)| p).chain(core::iter::once(seg.p1));
            for p in rest {
                let next = welder.weld(p);
                if next != prev {
                    let key = (prev.min(next), prev.max(next));
                    if seen.insert(key) {
                        edges.push(key);
                    }
                }
                prev = next;
            }
        }

        Self {
            vertices: welder.vertices,
            edges,
        }
    }
}

fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Records where segments `i` and `j` cut each other.
fn split_pair(
    segments: &[Segment],
    i: usize,
    j: usize,
    snap: f64,
    splits: &mut [Vec<(f64, Point)>],
) {
    let a = segments[i];
    let b = segments[j];

    // Endpoints resting on the other segment (T-junctions and collinear overlaps).
    for p in [b.p0, b.p1] {
        if let Some(t) = a.interior_param(p, snap) {
            splits[i].push((t, p));
        }
    }
    for p in [a.p0, a.p1] {
        if let Some(u) = b.interior_param(p, snap) {
            splits[j].push((u, p));
        }
    }

    let d1 = a.p1 - a.p0;
    let d2 = b.p1 - b.p0;
    let denom = d1.cross(d2);
    if denom.abs() <= 1e-12 * d1.hypot() * d2.hypot() {
        return;
    }
    let w = b.p0 - a.p0;
    let t = w.cross(d2) / denom;
    let u = w.cross(d1) / denom;
    if !(t > 0.0 && t < 1.0 && u > 0.0 && u < 1.0) {
        return;
    }
    let p = a.p0 + d1 * t;
    let near_end = [a.p0, a.p1, b.p0, b.p1]
        .iter()
        .any(|&end| end.distance(p) <= snap);
    if !near_end {
        splits[i].push((t, p));
        splits[j].push((u, p));
    }
}

/// Merges points that fall within `snap` of each other, using a hash grid of `snap`-sized cells.
#[derive(Debug)]
struct Welder {
    snap: f64,
    cells: HashMap<(i64, i64), SmallVec<[usize; 2]>>,
    vertices: Vec<Point>,
}

impl Welder {
    fn new(snap: f64) -> Self {
        Self {
            snap,
            cells: HashMap::new(),
            vertices: Vec::new(),
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "cell keys only need to agree for nearby points"
    )]
    fn cell(&self, p: Point) -> (i64, i64) {
        ((p.x / self.snap) as i64, (p.y / self.snap) as i64)
    }

    fn weld(&mut self, p: Point) -> usize {
        let (cx, cy) = self.cell(p);
        for dx in -1..=1 {
            for dy in -1..=1 {
                let Some(ids) = self.cells.get(&(cx + dx, cy + dy)) else {
                    continue;
                };
                if let Some(&id) = ids
                    .iter()
                    .find(|&&id| self.vertices[id].distance(p) <= self.snap)
                {
                    return id;
                }
            }
        }
        let id = self.vertices.len();
        self.vertices.push(p);
        self.cells.entry((cx, cy)).or_default().push(id);
        id
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    const SNAP: f64 = 1e-9;

    #[test]
    fn crossing_segments_meet_at_a_shared_vertex() {
        let a: Contour = vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0), Point::new(0.0, 10.0)];
        let b: Contour = vec![Point::new(10.0, 0.0), Point::new(0.0, 10.0), Point::new(10.0, 10.0)];
        let arr = Arrangement::build([&a, &b], SNAP);
        let center = arr
            .vertices
            .iter()
            .position(|p| p.distance(Point::new(5.0, 5.0)) < 1e-9);
        assert!(center.is_some(), "diagonals should cross at (5, 5)");
        let center = center.unwrap();
        let degree = arr
            .edges
            .iter()
            .filter(|&&(u, v)| u == center || v == center)
            .count();
        assert_eq!(degree, 4, "both diagonals are split at the crossing");
    }

    #[test]
    fn collinear_overlap_is_shared_once() {
        let a: Contour = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let b: Contour = vec![
            Point::new(0.0, 5.0),
            Point::new(10.0, 5.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let arr = Arrangement::build([&a, &b], SNAP);
        // Square: 4 corners plus the two split points at y = 5.
        assert_eq!(arr.vertices.len(), 6);
        // Bottom edge shared, both sides split in two, top edge, and the middle line.
        assert_eq!(arr.edges.len(), 7);
    }

    #[test]
    fn welder_merges_near_points_across_cells() {
        let mut welder = Welder::new(1e-3);
        let a = welder.weld(Point::new(0.9999e-3, 0.0));
        let b = welder.weld(Point::new(1.0001e-3, 0.0));
        let c = welder.weld(Point::new(5.0, 0.0));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
