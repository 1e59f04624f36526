//! Xiaolin Wu's antialiased line.

use crate::geometry::{Coord, WeightedPoint};

/// Rasterize an antialiased line using Wu's algorithm.
///
/// This implements Xiaolin Wu's line algorithm from SIGGRAPH '91. At every
/// scan position along the major axis two adjacent pixels are emitted whose
/// weights split the coverage according to the fractional distance of the
/// ideal line from the pixel centers.
///
/// # Output order
///
/// Scan direction follows ascending x after the steep swap (ascending y for
/// steep lines), two points per position:
///
/// 1. the first endpoint pair, scaled by its gap factor `1 - frac(x1 + 0.5)`,
/// 2. the interior pairs, whose weights sum to `1.0`,
/// 3. the second endpoint pair, scaled by its gap factor `frac(x2 + 0.5)`.
///
/// For integer input both gap factors are `0.5`.
///
/// # Degenerate input
///
/// A zero-length segment falls back to a gradient of `1.0` and produces both
/// endpoint pairs at the same position (four points, no interior).
pub fn wu_line(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<WeightedPoint> {
    let (x0, y0, x1, y1) = (f64::from(x1), f64::from(y1), f64::from(x2), f64::from(y2));

    let steep = (y1 - y0).abs() > (x1 - x0).abs();

    let (x0, y0, x1, y1) = if steep { (y0, x0, y1, x1) } else { (x0, y0, x1, y1) };

    let (x0, y0, x1, y1) = if x0 > x1 { (x1, y1, x0, y0) } else { (x0, y0, x1, y1) };

    let dx = x1 - x0;
    let dy = y1 - y0;
    let gradient = if dx == 0.0 { 1.0 } else { dy / dx };

    let capacity = 2 * (dx as usize + 2);
    let mut points = Vec::with_capacity(capacity);
    let mut plot = |x: Coord, y: Coord, weight: f64| {
        let point = if steep {
            WeightedPoint::new(y, x, weight)
        } else {
            WeightedPoint::new(x, y, weight)
        };
        points.push(point);
    };

    let first = Endpoint::new(x0, y0, gradient, rfpart(x0 + 0.5));
    let last = Endpoint::new(x1, y1, gradient, fpart(x1 + 0.5));

    first.plot(&mut plot);

    let mut intery = first.yend + gradient;
    for x in (first.x + 1)..last.x {
        let ipart = intery.floor() as Coord;
        plot(x, ipart, rfpart(intery));
        plot(x, ipart + 1, fpart(intery));
        intery += gradient;
    }

    last.plot(&mut plot);

    points
}

/// One rounded endpoint of a Wu line, in transformed (non-steep) space.
struct Endpoint {
    x: Coord,
    yend: f64,
    gap: f64,
}

impl Endpoint {
    fn new(x: f64, y: f64, gradient: f64, gap: f64) -> Self {
        let xend = x.round();
        let yend = y + gradient * (xend - x);
        Self { x: xend as Coord, yend, gap }
    }

    fn plot(&self, plot: &mut impl FnMut(Coord, Coord, f64)) {
        let ypxl = self.yend.floor() as Coord;
        plot(self.x, ypxl, rfpart(self.yend) * self.gap);
        plot(self.x, ypxl + 1, fpart(self.yend) * self.gap);
    }
}

/// Fractional part of a float.
#[inline]
fn fpart(x: f64) -> f64 {
    x - x.floor()
}

/// Reverse fractional part.
#[inline]
fn rfpart(x: f64) -> f64 {
    1.0 - fpart(x)
}
