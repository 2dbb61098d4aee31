// Copyright 2025 the Barcap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattened polygonal contours and nonzero point containment.

use alloc::vec::Vec;

use kurbo::{BezPath, PathEl, Point};

/// A closed polygon; the last point connects back to the first.
pub(crate) type Contour = Vec<Point>;

/// Flattens `path` into closed polygonal contours.
///
/// Every subpath is treated as closed, matching fill semantics. Contours with fewer than three
/// points cannot enclose anything and are dropped.
pub(crate) fn flatten_contours(path: &BezPath, tolerance: f64) -> Vec<Contour> {
    let mut contours = Vec::new();
    let mut current = Contour::new();
    kurbo::flatten(path.iter(), tolerance, |el| match el {
        PathEl::MoveTo(p) => {
            finish(&mut contours, &mut current);
            current.push(p);
        }
        PathEl::LineTo(p) => {
            if current.last() != Some(&p) {
                current.push(p);
            }
        }
        PathEl::ClosePath => finish(&mut contours, &mut current),
        // `flatten` only reports lines.
        PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
    });
    finish(&mut contours, &mut current);
    contours
}

fn finish(contours: &mut Vec<Contour>, current: &mut Contour) {
    let mut contour = core::mem::take(current);
    if contour.len() > 1 && contour.first() == contour.last() {
        contour.pop();
    }
    if contour.len() >= 3 {
        contours.push(contour);
    }
}

/// Winding number of `contours` around `p`.
pub(crate) fn winding(contours: &[Contour], p: Point) -> i32 {
    let mut w = 0;
    for contour in contours {
        let n = contour.len();
        for i in 0..n {
            let a = contour[i];
            let b = contour[(i + 1) % n];
            if a.y <= p.y {
                if b.y > p.y && side(a, b, p) > 0.0 {
                    w += 1;
                }
            } else if b.y <= p.y && side(a, b, p) < 0.0 {
                w -= 1;
            }
        }
    }
    w
}

/// Returns `true` if `p` is inside `contours` under the nonzero fill rule.
pub(crate) fn contains(contours: &[Contour], p: Point) -> bool {
    winding(contours, p) != 0
}

fn side(a: Point, b: Point, p: Point) -> f64 {
    (b - a).cross(p - a)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::{Circle, Rect, Shape};

    use super::*;

    #[test]
    fn rect_flattens_to_one_quad() {
        let path = Rect::new(0.0, 0.0, 10.0, 5.0).to_path(0.1);
        let contours = flatten_contours(&path, 0.1);
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].len(), 4);
    }

    #[test]
    fn degenerate_subpaths_are_dropped() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        path.close_path();
        path.move_to((3.0, 3.0));
        path.close_path();
        assert!(flatten_contours(&path, 0.1).is_empty());
    }

    #[test]
    fn containment_ignores_orientation() {
        let cw = Rect::new(0.0, 0.0, 10.0, 10.0).to_path(0.1);
        let mut ccw = cw.clone();
        ccw.apply_affine(kurbo::Affine::FLIP_X * kurbo::Affine::translate((-10.0, 0.0)));
        for path in [cw, ccw] {
            let contours = flatten_contours(&path, 0.1);
            assert!(contains(&contours, Point::new(5.0, 5.0)), "center is inside");
            assert!(!contains(&contours, Point::new(15.0, 5.0)), "right of the square");
            assert!(!contains(&contours, Point::new(5.0, -1.0)), "above the square");
        }
    }

    #[test]
    fn circle_contours_approximate_the_disk() {
        let circle = Circle::new((20.0, 20.0), 20.0);
        let contours = flatten_contours(&circle.to_path(0.1), 0.1);
        assert_eq!(contours.len(), 1);
        assert!(contours[0].len() > 8, "a circle needs more than a few chords");
        assert!(contains(&contours, Point::new(20.0, 1.0)));
        assert!(!contains(&contours, Point::new(1.0, 1.0)));
    }
}
