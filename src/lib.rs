//! # rastermark
//!
//! Line and circle rasterization algorithms with a steady-state micro-benchmark
//! harness.
//!
//! Six rasterizers convert a segment or a circle into an ordered sequence of
//! integer pixel coordinates, each carrying a coverage weight (always `1.0`
//! except for Wu's antialiased line). A dispatcher maps an algorithm tag plus
//! raw parameters to the right rasterizer, and the harness times it after a
//! warm-up call.
//!
//! ## Quick Start
//!
//! ```rust
//! use rastermark::prelude::*;
//!
//! let points = bresenham_line(0, 0, 5, 2);
//! assert_eq!(points.len(), 6);
//!
//! let harness = Harness::new(&IterationPlan::uniform(10))?;
//! let response = harness.execute(&RasterRequest::circle(0, 0, 5))?;
//! assert!(!response.points.is_empty());
//! # Ok::<(), rastermark::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): the `rastermark` binary and the `env_logger` backend
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Castle, C. M. A., & Pitteway, M. L. V. (1987). "An efficient structural
//!   technique for encoding 'best-fit' straight lines."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]

// ============================================================================
// Core Modules
// ============================================================================

/// Pixel coordinates, weighted points, and input primitives.
pub mod geometry;

/// The closed set of algorithm identifiers.
pub mod algorithm;

/// Rasterization algorithms.
pub mod raster;

// ============================================================================
// Dispatch and Measurement
// ============================================================================

/// Request resolution to rasterizer + arguments.
pub mod dispatch;

/// Warm-up + timed-repetition harness.
pub mod bench;

/// Newline-delimited JSON request stream.
pub mod batch;

// ============================================================================
// Ambient
// ============================================================================

/// YAML configuration.
pub mod config;

/// Logging setup.
pub mod logger;

/// Error types for rastermark operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use rastermark::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithm::{Algorithm, Family};
    pub use crate::batch::BatchSummary;
    pub use crate::bench::{Harness, IterationPlan, Measurement, RasterResponse};
    pub use crate::config::Config;
    pub use crate::dispatch::{RasterJob, RasterRequest};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Circle, Coord, Primitive, Segment, WeightedPoint};
    pub use crate::raster::{
        bresenham_circle, bresenham_line, castle_pitteway_line, castle_pitteway_moves, dda_line,
        step_line, wu_line, Move, MovePlan,
    };
}
