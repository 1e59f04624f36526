//! Request resolution: algorithm tag + raw parameters to a runnable job.
//!
//! The line family reads `x1, y1, x2, y2` and ignores `radius`; the circle
//! algorithm reads `x1, y1` as the center plus `radius` and ignores `x2, y2`.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;
use crate::error::Result;
use crate::geometry::{Circle, Primitive, Segment, WeightedPoint};
use crate::raster::{
    bresenham_circle, bresenham_line, castle_pitteway_line, dda_line, step_line, wu_line,
    CircleRasterizer, LineRasterizer,
};

/// Inbound request as it crosses the transport boundary.
///
/// `algorithm` stays a raw string here so that an unrecognised tag surfaces
/// as [`Error::UnknownAlgorithm`](crate::Error::UnknownAlgorithm) from
/// [`RasterRequest::resolve`] instead of a generic deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterRequest {
    /// Algorithm tag (`step`, `dda`, `bresenham_line`, ...).
    pub algorithm: String,
    /// Start x (line) or center x (circle).
    pub x1: i32,
    /// Start y (line) or center y (circle).
    pub y1: i32,
    /// End x; line family only.
    #[serde(default)]
    pub x2: i32,
    /// End y; line family only.
    #[serde(default)]
    pub y2: i32,
    /// Radius; circle only.
    #[serde(default)]
    pub radius: i32,
}

impl RasterRequest {
    /// Create a line-family request.
    #[must_use]
    pub fn line(algorithm: Algorithm, x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { algorithm: algorithm.tag().to_string(), x1, y1, x2, y2, radius: 0 }
    }

    /// Create a circle request.
    #[must_use]
    pub fn circle(xc: i32, yc: i32, radius: i32) -> Self {
        Self {
            algorithm: Algorithm::BresenhamCircle.tag().to_string(),
            x1: xc,
            y1: yc,
            x2: 0,
            y2: 0,
            radius,
        }
    }

    /// Resolve the tag and extract the arguments the algorithm consumes.
    pub fn resolve(&self) -> Result<RasterJob> {
        let algorithm: Algorithm = self.algorithm.parse()?;
        let job = RasterJob::new(algorithm, self.x1, self.y1, self.x2, self.y2, self.radius);
        debug!("resolved '{}' to {:?}", self.algorithm, job.primitive());
        Ok(job)
    }
}

/// A rasterizer entry point, by input family.
#[derive(Debug, Clone, Copy)]
pub enum Rasterizer {
    /// Takes `(x1, y1, x2, y2)`.
    Line(LineRasterizer),
    /// Takes `(xc, yc, radius)`.
    Circle(CircleRasterizer),
}

/// The rasterizer implementing `algorithm`.
#[must_use]
pub fn rasterizer(algorithm: Algorithm) -> Rasterizer {
    match algorithm {
        Algorithm::Step => Rasterizer::Line(step_line),
        Algorithm::Dda => Rasterizer::Line(dda_line),
        Algorithm::BresenhamLine => Rasterizer::Line(bresenham_line),
        Algorithm::BresenhamCircle => Rasterizer::Circle(bresenham_circle),
        Algorithm::Wu => Rasterizer::Line(wu_line),
        Algorithm::CastlePitteway => Rasterizer::Line(castle_pitteway_line),
    }
}

#[derive(Debug, Clone, Copy)]
enum Call {
    Line(LineRasterizer, Segment),
    Circle(CircleRasterizer, Circle),
}

/// A resolved rasterizer together with its fixed argument tuple.
///
/// Running a job is deterministic: identical jobs always produce identical
/// point sequences.
#[derive(Debug, Clone, Copy)]
pub struct RasterJob {
    algorithm: Algorithm,
    call: Call,
}

impl RasterJob {
    /// Bind `algorithm` to the parameters of its family; the others are ignored.
    #[must_use]
    pub fn new(algorithm: Algorithm, x1: i32, y1: i32, x2: i32, y2: i32, radius: i32) -> Self {
        let call = match rasterizer(algorithm) {
            Rasterizer::Line(f) => Call::Line(f, Segment::new(x1, y1, x2, y2)),
            Rasterizer::Circle(f) => Call::Circle(f, Circle::new(x1, y1, radius)),
        };
        Self { algorithm, call }
    }

    /// Algorithm this job runs.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The geometry handed to the rasterizer.
    #[must_use]
    pub fn primitive(&self) -> Primitive {
        match self.call {
            Call::Line(_, segment) => Primitive::Segment(segment),
            Call::Circle(_, circle) => Primitive::Circle(circle),
        }
    }

    /// Invoke the rasterizer once.
    #[must_use]
    pub fn run(&self) -> Vec<WeightedPoint> {
        match self.call {
            Call::Line(f, s) => f(s.x1, s.y1, s.x2, s.y2),
            Call::Circle(f, c) => f(c.xc, c.yc, c.radius),
        }
    }
}
