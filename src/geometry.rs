//! Geometric primitives and rasterizer output types.
//!
//! Inputs are `i32` pixel coordinates; outputs use the wider [`Coord`] so that
//! reflections and deltas over the full `i32` range never overflow.

use serde::{Deserialize, Serialize};

/// Output pixel coordinate.
pub type Coord = i64;

/// A pixel coordinate with a coverage weight in `[0, 1]`.
///
/// Every rasterizer except Wu's emits fully covered pixels (`weight == 1.0`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedPoint {
    /// X coordinate.
    pub x: Coord,
    /// Y coordinate.
    pub y: Coord,
    /// Coverage weight.
    pub weight: f64,
}

impl WeightedPoint {
    /// Create a point with an explicit coverage weight.
    #[must_use]
    pub const fn new(x: Coord, y: Coord, weight: f64) -> Self {
        Self { x, y, weight }
    }

    /// Create a fully covered point (`weight == 1.0`).
    #[must_use]
    pub const fn solid(x: Coord, y: Coord) -> Self {
        Self::new(x, y, 1.0)
    }

    /// Integer position, ignoring the weight.
    #[must_use]
    pub const fn position(self) -> (Coord, Coord) {
        (self.x, self.y)
    }
}

/// A line segment between two integer endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Segment {
    /// Start x.
    pub x1: i32,
    /// Start y.
    pub y1: i32,
    /// End x.
    pub x2: i32,
    /// End y.
    pub y2: i32,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Signed extents `(x2 - x1, y2 - y1)`, computed without overflow.
    #[must_use]
    pub const fn delta(&self) -> (i64, i64) {
        (self.x2 as i64 - self.x1 as i64, self.y2 as i64 - self.y1 as i64)
    }

    /// Length of the driving axis, `max(|dx|, |dy|)`.
    #[must_use]
    pub const fn major_extent(&self) -> u64 {
        let (dx, dy) = self.delta();
        let (adx, ady) = (dx.unsigned_abs(), dy.unsigned_abs());
        if adx >= ady {
            adx
        } else {
            ady
        }
    }

    /// Whether both endpoints coincide.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.x1 == self.x2 && self.y1 == self.y2
    }
}

/// A circle given by integer center and radius.
///
/// The radius is not normalized: zero and negative values are legal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Circle {
    /// Center x.
    pub xc: i32,
    /// Center y.
    pub yc: i32,
    /// Radius in pixels.
    pub radius: i32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(xc: i32, yc: i32, radius: i32) -> Self {
        Self { xc, yc, radius }
    }
}

/// A primitive ready to be handed to a rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    /// Input of the line-family algorithms.
    Segment(Segment),
    /// Input of the circle algorithm.
    Circle(Circle),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_delta() {
        let seg = Segment::new(3, 4, -2, 10);
        assert_eq!(seg.delta(), (-5, 6));
        assert_eq!(seg.major_extent(), 6);
    }

    #[test]
    fn test_segment_delta_full_range() {
        let seg = Segment::new(i32::MIN, i32::MAX, i32::MAX, i32::MIN);
        let (dx, dy) = seg.delta();
        assert_eq!(dx, u32::MAX as i64);
        assert_eq!(dy, -(u32::MAX as i64));
        assert_eq!(seg.major_extent(), u64::from(u32::MAX));
    }

    #[test]
    fn test_segment_degenerate() {
        assert!(Segment::new(7, 7, 7, 7).is_degenerate());
        assert!(!Segment::new(7, 7, 7, 8).is_degenerate());
    }

    #[test]
    fn test_weighted_point_solid() {
        let p = WeightedPoint::solid(-3, 9);
        assert_eq!(p.position(), (-3, 9));
        assert!((p.weight - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weighted_point_json_shape() {
        let json = serde_json::to_string(&WeightedPoint::new(1, 2, 0.5)).unwrap();
        assert_eq!(json, r#"{"x":1,"y":2,"weight":0.5}"#);
    }
}
