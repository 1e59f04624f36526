//! Logging setup.
//!
//! The library only emits through the [`log`] facade. Binaries call [`init`]
//! once to install the `env_logger` backend; `RUST_LOG` takes precedence over
//! the verbosity-derived default.

use log::LevelFilter;

/// Default level for a `-v` count: warn, info, debug, then trace.
#[must_use]
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. Later calls are no-ops.
#[cfg(feature = "cli")]
pub fn init(verbosity: u8) {
    let default = level_for(verbosity).to_string().to_lowercase();
    let env = env_logger::Env::default().default_filter_or(default);
    // try_init fails only when a logger is already installed
    let _ = env_logger::Builder::from_env(env).format_timestamp_micros().try_init();
}
