//! Error types for trueno-raster operations.
//!
//! Rasterization and fill algorithms never fail: degenerate geometry yields a
//! minimal result and out-of-grid pixels are clipped. These errors cover the
//! surfaces around them (framebuffers, PNG export, configuration, parsing).

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer or grid.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Grid point parsing error.
    #[error("Invalid grid point '{0}': expected \"x,y\"")]
    InvalidPoint(String),

    /// Shape text with the wrong number of parts or a bad radius.
    #[error("Invalid {kind} '{input}': expected {expected}")]
    InvalidShape {
        /// Shape being parsed (segment, circle, polygon).
        kind: &'static str,
        /// The text that failed to parse.
        input: String,
        /// Accepted form.
        expected: &'static str,
    },

    /// Unrecognized algorithm name.
    #[error("Unknown {family} algorithm: {name}")]
    UnknownAlgorithm {
        /// Algorithm family (line, circle, fill).
        family: &'static str,
        /// The name that failed to parse.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_config_parse_reports_line() {
        let err = Error::ConfigParse {
            line: 7,
            message: "bad value".to_string(),
        };
        assert!(err.to_string().contains("line 7"));
        assert!(err.to_string().contains("bad value"));
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = Error::UnknownAlgorithm {
            family: "fill",
            name: "spray".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown fill algorithm: spray");
    }
}
