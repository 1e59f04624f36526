//! Digital differential analyzer.

use super::round_coord;
use crate::geometry::{Segment, WeightedPoint};

/// Rasterize a segment with the DDA algorithm.
///
/// `steps = max(|dx|, |dy|)`; both coordinates advance by `d/steps` per step
/// in unrounded floating point and are rounded only when a point is emitted,
/// so rounding never feeds back into the accumulation. Produces `steps + 1`
/// points; a zero-length segment yields the start point alone.
pub fn dda_line(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<WeightedPoint> {
    let segment = Segment::new(x1, y1, x2, y2);
    let steps = segment.major_extent();
    if steps == 0 {
        return vec![WeightedPoint::solid(x1.into(), y1.into())];
    }

    let (dx, dy) = segment.delta();
    let x_inc = dx as f64 / steps as f64;
    let y_inc = dy as f64 / steps as f64;

    let mut x = f64::from(x1);
    let mut y = f64::from(y1);
    let mut points = Vec::with_capacity(steps as usize + 1);

    for _ in 0..=steps {
        points.push(WeightedPoint::solid(round_coord(x), round_coord(y)));
        x += x_inc;
        y += y_inc;
    }

    points
}
