//! Error types for rastermark operations.

use std::io;
use thiserror::Error;

const KNOWN_TAGS: &str = "step, dda, bresenham_line, bresenham_circle, wu, castle_pitteway";

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving, running, or configuring rasterizers.
///
/// Degenerate geometry (zero-length segments, zero or negative radius) is never
/// an error: every rasterizer is total over its integer input domain.
#[derive(Error, Debug)]
pub enum Error {
    /// The algorithm identifier is not one of the six known tags.
    #[error("unknown algorithm '{0}' (expected one of: {known})", known = KNOWN_TAGS)]
    UnknownAlgorithm(String),

    /// An iteration count of zero cannot produce an average.
    #[error("invalid iteration count for '{algorithm}': {count} (must be at least 1)")]
    InvalidIterations {
        /// Algorithm the count was configured for.
        algorithm: String,
        /// Offending count.
        count: u32,
    },

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Error message describing why the value is invalid.
        message: String,
    },

    /// Malformed JSON request or unserializable response.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error (config files, stdin/stdout transport).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_algorithm_includes_tag() {
        let err = Error::UnknownAlgorithm("xiaolin".to_string());
        let display = err.to_string();

        assert!(display.contains("xiaolin"), "Error should include tag: {display}");
        assert!(display.contains("castle_pitteway"), "Error should list known tags: {display}");
    }

    #[test]
    fn test_invalid_iterations_includes_details() {
        let err = Error::InvalidIterations { algorithm: "wu".to_string(), count: 0 };
        let display = err.to_string();

        assert!(display.contains("wu"));
        assert!(display.contains('0'));
    }

    #[test]
    fn test_config_parse_error_includes_line_number() {
        let err = Error::ConfigParse { line: 42, message: "invalid value".to_string() };
        let display = err.to_string();

        assert!(display.contains("42"), "Error should include line number: {display}");
        assert!(display.contains("invalid value"), "Error should include message: {display}");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        assert!(matches!(err, Error::Io(_)), "Should convert to Io");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();

        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
