//! Bresenham's integer line and midpoint circle.

use std::collections::HashSet;

use crate::geometry::{Coord, Segment, WeightedPoint};

/// Rasterize a segment using Bresenham's algorithm (integer arithmetic only).
///
/// Both error branches are tested independently on every iteration, so a
/// single step may advance x and y together (a diagonal move). The walk ends
/// exactly on `(x2, y2)` after `max(|dx|, |dy|) + 1` points.
///
/// The step direction on an axis with zero extent is `-1`; it is never taken
/// because the error term cannot select that axis.
pub fn bresenham_line(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<WeightedPoint> {
    let segment = Segment::new(x1, y1, x2, y2);
    let (dx, dy) = segment.delta();
    let (dx, dy) = (dx.abs(), dy.abs());
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx - dy;

    let (end_x, end_y) = (Coord::from(x2), Coord::from(y2));
    let mut x = Coord::from(x1);
    let mut y = Coord::from(y1);
    let mut points = Vec::with_capacity(segment.major_extent() as usize + 1);

    loop {
        points.push(WeightedPoint::solid(x, y));

        if x == end_x && y == end_y {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    points
}

/// Rasterize a circle outline with the midpoint (Bresenham) circle algorithm.
///
/// Starting from `(0, radius)` with decision `d = 3 - 2r`, each octant point
/// is reflected into all eight octants, for the initial point and after every
/// step while `y >= x`.
///
/// Octant boundaries generate the same pixel more than once. Duplicates are
/// dropped keeping the first occurrence, so the result is deterministic and
/// follows generation order (step by step, eight reflections each). It is
/// **not** angular order around the circle.
///
/// Every emitted pixel lies within half a pixel of the true circle.
///
/// A zero radius yields the center alone. A negative radius never enters the
/// stepping loop and yields the four distinct reflections of `(0, radius)`.
pub fn bresenham_circle(xc: i32, yc: i32, radius: i32) -> Vec<WeightedPoint> {
    let (xc, yc) = (Coord::from(xc), Coord::from(yc));
    if radius == 0 {
        return vec![WeightedPoint::solid(xc, yc)];
    }

    let mut x: Coord = 0;
    let mut y = Coord::from(radius);
    let mut d = 3 - 2 * y;

    let mut seen = HashSet::new();
    let mut points = Vec::new();
    let mut plot = |x: Coord, y: Coord| {
        for (px, py) in octant_reflections(xc, yc, x, y) {
            if seen.insert((px, py)) {
                points.push(WeightedPoint::solid(px, py));
            }
        }
    };

    plot(x, y);

    while y >= x {
        // The decision update reads x and y before they advance.
        if d > 0 {
            d += 4 * (x - y) + 10;
            y -= 1;
        } else {
            d += 4 * x + 6;
        }
        x += 1;
        plot(x, y);
    }

    points
}

/// The eight symmetric images of octant point `(x, y)` around `(xc, yc)`.
#[inline]
fn octant_reflections(xc: Coord, yc: Coord, x: Coord, y: Coord) -> [(Coord, Coord); 8] {
    [
        (xc + x, yc + y),
        (xc - x, yc + y),
        (xc + x, yc - y),
        (xc - x, yc - y),
        (xc + y, yc + x),
        (xc - y, yc + x),
        (xc + y, yc - x),
        (xc - y, yc - x),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(points: &[WeightedPoint]) -> Vec<(i64, i64)> {
        points.iter().map(|p| p.position()).collect()
    }

    #[test]
    fn test_line_horizontal() {
        let points = bresenham_line(10, 50, 14, 50);
        assert_eq!(positions(&points), vec![(10, 50), (11, 50), (12, 50), (13, 50), (14, 50)]);
    }

    #[test]
    fn test_line_vertical_uses_negative_default_step() {
        // x1 == x2 picks sx = -1, which is never applied.
        let points = bresenham_line(3, 0, 3, 3);
        assert_eq!(positions(&points), vec![(3, 0), (3, 1), (3, 2), (3, 3)]);
    }

    #[test]
    fn test_line_diagonal() {
        let points = bresenham_line(10, 10, 13, 7);
        assert_eq!(positions(&points), vec![(10, 10), (11, 9), (12, 8), (13, 7)]);
    }

    #[test]
    fn test_line_shallow() {
        let points = bresenham_line(0, 0, 5, 2);
        assert_eq!(positions(&points), vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]);
    }

    #[test]
    fn test_line_out_of_quadrant() {
        // Negative coordinates are just coordinates.
        let points = bresenham_line(-10, -10, 110, 110);
        assert_eq!(points.len(), 121);
        assert_eq!(points.last().unwrap().position(), (110, 110));
    }

    #[test]
    fn test_line_degenerate() {
        assert_eq!(bresenham_line(4, 4, 4, 4), vec![WeightedPoint::solid(4, 4)]);
    }

    #[test]
    fn test_circle_zero_radius() {
        assert_eq!(bresenham_circle(50, 50, 0), vec![WeightedPoint::solid(50, 50)]);
    }

    #[test]
    fn test_circle_radius_one() {
        let points = bresenham_circle(0, 0, 1);
        assert_eq!(positions(&points), vec![(0, 1), (0, -1), (1, 0), (-1, 0)]);
    }

    #[test]
    fn test_circle_radius_five_octant() {
        let points = bresenham_circle(0, 0, 5);
        let set: HashSet<_> = positions(&points).into_iter().collect();

        // First octant (x <= y, both non-negative) traced by the stepping loop.
        for p in [(0, 5), (1, 5), (2, 5), (3, 4)] {
            assert!(set.contains(&p), "missing {p:?}");
        }
        assert_eq!(points.len(), set.len(), "duplicates must be removed");
        assert_eq!(points.len(), 28);
    }

    #[test]
    fn test_circle_generation_order_starts_at_top() {
        let points = bresenham_circle(10, 20, 5);
        assert_eq!(points[0].position(), (10, 25));
        assert_eq!(points[1].position(), (10, 15));
    }

    #[test]
    fn test_circle_diagonal_step_stays_on_circle() {
        let set: HashSet<_> = positions(&bresenham_circle(0, 0, 9)).into_iter().collect();
        assert!(set.contains(&(6, 7)));
        assert!(!set.contains(&(6, 6)), "(6, 6) is 0.51 inside radius 9");

        let set: HashSet<_> = positions(&bresenham_circle(0, 0, 14)).into_iter().collect();
        assert!(!set.contains(&(9, 10)), "(9, 10) is 0.55 inside radius 14");
    }

    #[test]
    fn test_circle_negative_radius() {
        let points = bresenham_circle(0, 0, -3);
        let set: HashSet<_> = positions(&points).into_iter().collect();
        assert_eq!(points.len(), 4);
        for p in [(0, -3), (0, 3), (-3, 0), (3, 0)] {
            assert!(set.contains(&p), "missing {p:?}");
        }
    }

    #[test]
    fn test_circle_deterministic() {
        assert_eq!(bresenham_circle(3, -4, 17), bresenham_circle(3, -4, 17));
    }
}
