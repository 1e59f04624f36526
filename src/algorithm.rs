//! The closed set of rasterization algorithms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Which input a rasterizer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Two endpoints `(x1, y1) -> (x2, y2)`.
    Line,
    /// Center `(x1, y1)` and a radius.
    Circle,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line => f.write_str("line"),
            Self::Circle => f.write_str("circle"),
        }
    }
}

/// Rasterization algorithm identifier.
///
/// Serialized as the `snake_case` tag used on the request boundary
/// (`"step"`, `"dda"`, `"bresenham_line"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Slope-intercept stepping along the driving axis.
    Step,
    /// Digital differential analyzer.
    Dda,
    /// Integer-only Bresenham line.
    BresenhamLine,
    /// Midpoint (Bresenham) circle.
    BresenhamCircle,
    /// Xiaolin Wu's antialiased line.
    Wu,
    /// Castle-Pitteway run-length slice line.
    CastlePitteway,
}

impl Algorithm {
    /// All algorithms, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Step,
        Self::Dda,
        Self::BresenhamLine,
        Self::BresenhamCircle,
        Self::Wu,
        Self::CastlePitteway,
    ];

    /// The wire tag of this algorithm.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Step => "step",
            Self::Dda => "dda",
            Self::BresenhamLine => "bresenham_line",
            Self::BresenhamCircle => "bresenham_circle",
            Self::Wu => "wu",
            Self::CastlePitteway => "castle_pitteway",
        }
    }

    /// Input family of this algorithm.
    #[must_use]
    pub const fn family(self) -> Family {
        match self {
            Self::BresenhamCircle => Family::Circle,
            Self::Step | Self::Dda | Self::BresenhamLine | Self::Wu | Self::CastlePitteway => {
                Family::Line
            }
        }
    }

    /// Whether every emitted point carries `weight == 1.0`.
    #[must_use]
    pub const fn is_solid(self) -> bool {
        !matches!(self, Self::Wu)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.tag() == s)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}
