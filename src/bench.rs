//! Steady-state micro-benchmark harness.
//!
//! A measurement calls the rasterizer once to warm caches, then `N` more times
//! in a tight loop timed with a monotonic clock ([`Instant`]). The reported
//! figure is the truncated average per call in nanoseconds, and the points are
//! those of the final call.
//!
//! `N` comes from an explicit [`IterationPlan`] rather than constants, so the
//! harness holds no global state and is safe to share across threads.

use std::collections::BTreeMap;
use std::hint::black_box;
use std::num::NonZeroU32;
use std::time::{Duration, Instant};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;
use crate::dispatch::{RasterJob, RasterRequest};
use crate::error::{Error, Result};
use crate::geometry::WeightedPoint;

/// Algorithm → repetition count table.
///
/// Algorithms with heavier per-step bookkeeping (Wu, Castle-Pitteway) default
/// to fewer repetitions so wall-clock cost stays comparable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationPlan {
    /// Repetitions for algorithms without an override.
    #[serde(default = "default_iterations")]
    pub default_iterations: u32,

    /// Per-algorithm repetitions.
    #[serde(default = "default_overrides")]
    pub overrides: BTreeMap<Algorithm, u32>,
}

fn default_iterations() -> u32 {
    1000
}
fn default_overrides() -> BTreeMap<Algorithm, u32> {
    BTreeMap::from([(Algorithm::Wu, 500), (Algorithm::CastlePitteway, 500)])
}

impl Default for IterationPlan {
    fn default() -> Self {
        Self { default_iterations: default_iterations(), overrides: default_overrides() }
    }
}

impl IterationPlan {
    /// A plan running every algorithm `iterations` times.
    #[must_use]
    pub fn uniform(iterations: u32) -> Self {
        Self { default_iterations: iterations, overrides: BTreeMap::new() }
    }

    /// Repetitions configured for `algorithm`.
    #[must_use]
    pub fn iterations_for(&self, algorithm: Algorithm) -> u32 {
        self.overrides.get(&algorithm).copied().unwrap_or(self.default_iterations)
    }

    /// Check that every configured count is at least 1.
    pub fn validate(&self) -> Result<()> {
        if self.default_iterations == 0 {
            return Err(Error::InvalidIterations {
                algorithm: "default".to_string(),
                count: 0,
            });
        }
        if let Some((algorithm, &count)) = self.overrides.iter().find(|(_, &n)| n == 0) {
            return Err(Error::InvalidIterations { algorithm: algorithm.to_string(), count });
        }
        Ok(())
    }
}

/// Result of one harness run.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Algorithm that was measured.
    pub algorithm: Algorithm,
    /// Points produced by the final timed call.
    pub points: Vec<WeightedPoint>,
    /// Number of timed calls (warm-up excluded).
    pub iterations: u32,
    /// Wall time of the whole timed loop.
    pub total: Duration,
    /// `total / iterations`, truncated to whole nanoseconds.
    pub average_ns: u64,
}

/// Outbound response as it crosses the transport boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterResponse {
    /// Ordered points; order is part of each algorithm's contract.
    pub points: Vec<WeightedPoint>,
    /// Average nanoseconds per call.
    pub execution_time_ns: u64,
}

impl From<Measurement> for RasterResponse {
    fn from(measurement: Measurement) -> Self {
        Self { points: measurement.points, execution_time_ns: measurement.average_ns }
    }
}

/// Warm-up + timed-repetition runner.
#[derive(Debug, Clone)]
pub struct Harness {
    default_iterations: NonZeroU32,
    overrides: BTreeMap<Algorithm, NonZeroU32>,
}

impl Default for Harness {
    fn default() -> Self {
        Self::from_validated(&IterationPlan::default())
    }
}

impl Harness {
    /// Create a harness, rejecting zero iteration counts.
    pub fn new(plan: &IterationPlan) -> Result<Self> {
        plan.validate()?;
        Ok(Self::from_validated(plan))
    }

    fn from_validated(plan: &IterationPlan) -> Self {
        let non_zero = |n: u32| NonZeroU32::new(n).unwrap_or(NonZeroU32::MIN);
        Self {
            default_iterations: non_zero(plan.default_iterations),
            overrides: plan.overrides.iter().map(|(&a, &n)| (a, non_zero(n))).collect(),
        }
    }

    /// Timed repetitions used for `algorithm`.
    #[must_use]
    pub fn iterations_for(&self, algorithm: Algorithm) -> NonZeroU32 {
        self.overrides.get(&algorithm).copied().unwrap_or(self.default_iterations)
    }

    /// Measure a resolved job.
    ///
    /// Blocks the calling thread for one warm-up call plus `N` timed calls.
    pub fn measure(&self, job: &RasterJob) -> Measurement {
        let algorithm = job.algorithm();
        let iterations = self.iterations_for(algorithm);

        let warm_up = black_box(job.run());
        trace!("{algorithm}: warm-up produced {} points", warm_up.len());
        drop(warm_up);

        let mut points = Vec::new();
        let start = Instant::now();
        for _ in 0..iterations.get() {
            points = black_box(black_box(job).run());
        }
        let total = start.elapsed();

        let average = total.as_nanos() / u128::from(iterations.get());
        let average_ns = u64::try_from(average).unwrap_or(u64::MAX);
        debug!(
            "{algorithm}: {} points, {iterations} iterations, {average_ns} ns/call",
            points.len()
        );

        Measurement { algorithm, points, iterations: iterations.get(), total, average_ns }
    }

    /// Resolve and measure a transport request.
    pub fn execute(&self, request: &RasterRequest) -> Result<RasterResponse> {
        let job = request.resolve()?;
        Ok(self.measure(&job).into())
    }
}
