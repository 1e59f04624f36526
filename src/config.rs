//! Configuration for the benchmark harness.
//!
//! Supports YAML configuration with precedence: CLI > ENV > file > defaults.
//!
//! ```yaml
//! version: 1
//! bench:
//!   default_iterations: 1000
//!   overrides:
//!     wu: 500
//!     castle_pitteway: 500
//! ```

use std::io;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::bench::IterationPlan;
use crate::error::{Error, Result};

/// Environment variable overriding the iteration count of every algorithm.
pub const ITERATIONS_ENV: &str = "RASTERMARK_ITERATIONS";

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Harness repetition counts.
    #[serde(default)]
    pub bench: IterationPlan,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self { version: default_version(), bench: IterationPlan::default() }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config dir>/rastermark/config.yaml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rastermark").join("config.yaml"))
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist,
    /// [`Error::Io`] if it exists but cannot be read, and a parse or
    /// validation error otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::ConfigNotFound(path.display().to_string()),
            _ => Error::Io(e),
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or
    /// [`Error::InvalidIterations`] for a zero repetition count.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })?;
        config.bench.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    ///
    /// A missing file is silent; any other failure is logged with `warn!`.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(Error::ConfigNotFound(_)) => Self::default(),
            Err(e) => {
                warn!("ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] if [`ITERATIONS_ENV`] is set but is not
    /// a positive integer.
    pub fn apply_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(raw) = lookup(ITERATIONS_ENV) {
            let iterations = parse_iterations(ITERATIONS_ENV, &raw)?;
            self.bench = IterationPlan::uniform(iterations);
        }
        Ok(self)
    }

    /// Apply overrides from the process environment.
    pub fn with_process_env(self) -> Result<Self> {
        self.apply_env(|key| std::env::var(key).ok())
    }
}

fn parse_iterations(key: &str, raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::ConfigInvalid {
            key: key.to_string(),
            message: format!("expected a positive integer, got '{raw}'"),
        }),
    }
}
