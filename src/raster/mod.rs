//! Rasterization algorithms for line segments and circles.
//!
//! Every rasterizer is a pure function from integer geometry to an ordered
//! sequence of [`WeightedPoint`]s. None of them allocate beyond the output
//! vector (Castle-Pitteway additionally keeps its compact move plan) and none
//! of them can fail: degenerate input has a defined minimal result.
//!
//! # Algorithms
//!
//! - **Step**: slope-intercept evaluation along the driving axis
//! - **DDA**: incremental floating-point digital differential analyzer
//! - **Bresenham's Line**: integer-only error accumulation
//! - **Midpoint Circle**: eight-way symmetric circle generation
//! - **Wu's Anti-aliased Line**: two coverage-weighted pixels per scan position
//! - **Castle-Pitteway**: Euclidean decomposition into simple/diagonal moves
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Castle, C. M. A., & Pitteway, M. L. V. (1987). "An efficient structural
//!   technique for encoding 'best-fit' straight lines." *The Computer Journal*.

mod bresenham;
mod castle_pitteway;
mod dda;
mod step;
mod wu;

pub use bresenham::{bresenham_circle, bresenham_line};
pub use castle_pitteway::{
    castle_pitteway_line, castle_pitteway_moves, Move, MoveIter, MovePlan, MoveRun,
};
pub use dda::dda_line;
pub use step::step_line;
pub use wu::wu_line;

use crate::geometry::{Coord, WeightedPoint};

/// Signature shared by the line-family rasterizers: `(x1, y1, x2, y2)`.
pub type LineRasterizer = fn(i32, i32, i32, i32) -> Vec<WeightedPoint>;

/// Signature of the circle rasterizer: `(xc, yc, radius)`.
pub type CircleRasterizer = fn(i32, i32, i32) -> Vec<WeightedPoint>;

/// Round to the nearest integer, ties to even.
///
/// Step and DDA emit `.5` positions regularly (e.g. a 2:1 slope); ties go to
/// the even neighbour so both algorithms agree on the same pixel.
#[inline]
fn round_coord(v: f64) -> Coord {
    v.round_ties_even() as Coord
}
