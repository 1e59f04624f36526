//! Slope-intercept stepping.

use super::round_coord;
use crate::geometry::{Segment, WeightedPoint};

/// Rasterize a segment by evaluating `y = k·x + b` (or `x = k·y + b` for steep
/// segments) at every integer position of the driving axis.
///
/// The driving axis is x when `|dx| >= |dy|`, otherwise y. Exactly
/// `max(|dx|, |dy|) + 1` points are produced, walking from `(x1, y1)` to
/// `(x2, y2)`. Coincident endpoints yield the single start point; the driving
/// axis of any other segment has a non-zero extent, so the slope division is
/// always defined.
pub fn step_line(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<WeightedPoint> {
    let segment = Segment::new(x1, y1, x2, y2);
    if segment.is_degenerate() {
        return vec![WeightedPoint::solid(x1.into(), y1.into())];
    }

    let (dx, dy) = segment.delta();
    let mut points = Vec::with_capacity(segment.major_extent() as usize + 1);

    if dx.abs() >= dy.abs() {
        let k = dy as f64 / dx as f64;
        let b = f64::from(y1) - k * f64::from(x1);
        for x in driving_range(x1.into(), x2.into()) {
            points.push(WeightedPoint::solid(x, round_coord(k * x as f64 + b)));
        }
    } else {
        let k = dx as f64 / dy as f64;
        let b = f64::from(x1) - k * f64::from(y1);
        for y in driving_range(y1.into(), y2.into()) {
            points.push(WeightedPoint::solid(round_coord(k * y as f64 + b), y));
        }
    }

    points
}

/// Inclusive walk from `from` to `to` in whichever direction `to` lies.
fn driving_range(from: i64, to: i64) -> impl Iterator<Item = i64> {
    let step = if to >= from { 1 } else { -1 };
    (0..=(to - from).abs()).map(move |i| from + i * step)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(points: &[WeightedPoint]) -> Vec<(i64, i64)> {
        points.iter().map(|p| p.position()).collect()
    }

    #[test]
    fn test_step_horizontal() {
        let points = step_line(2, 5, 6, 5);
        assert_eq!(positions(&points), vec![(2, 5), (3, 5), (4, 5), (5, 5), (6, 5)]);
    }

    #[test]
    fn test_step_vertical_descending() {
        let points = step_line(1, 3, 1, -1);
        assert_eq!(positions(&points), vec![(1, 3), (1, 2), (1, 1), (1, 0), (1, -1)]);
    }

    #[test]
    fn test_step_shallow_slope() {
        // k = 0.4: y = 0, 0.4, 0.8, 1.2, 1.6, 2.0
        let points = step_line(0, 0, 5, 2);
        assert_eq!(positions(&points), vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]);
    }

    #[test]
    fn test_step_steep_reversed() {
        let points = step_line(0, 4, -2, 0);
        assert_eq!(points.len(), 5);
        assert_eq!(points.first().unwrap().position(), (0, 4));
        assert_eq!(points.last().unwrap().position(), (-2, 0));
        // Each y visited exactly once, descending.
        let ys: Vec<i64> = points.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_step_half_ties_go_to_even() {
        // k = 0.5: y = 0, 0.5, 1, 1.5, 2
        let points = step_line(0, 0, 4, 2);
        assert_eq!(positions(&points), vec![(0, 0), (1, 0), (2, 1), (3, 2), (4, 2)]);
    }

    #[test]
    fn test_step_degenerate() {
        let points = step_line(9, -9, 9, -9);
        assert_eq!(points, vec![WeightedPoint::solid(9, -9)]);
    }

    #[test]
    fn test_step_all_weights_solid() {
        assert!(step_line(-3, 7, 11, -2).iter().all(|p| (p.weight - 1.0).abs() < f64::EPSILON));
    }
}
