//! Error types for transcript-stepper.
//!
//! Errors are `thiserror` enums that compose via `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`LoadError`] - Transcript could not be fetched (missing file, HTTP status, IO)
//!   - [`DecodeError`] - A single transcript line failed to decode
//!   - [`ConfigError`](crate::config::ConfigError) - Config file unreadable or invalid
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing setup failed
//!   - [`ExportError`](crate::view::ExportError) - Pages could not be written
//!
//! # Error Recovery Strategy
//!
//! Decode errors are **non-fatal**: the offending line is dropped and the load
//! continues with the remaining lines. A corrupt single line never aborts the view.
//!
//! Load errors are terminal for the current load. They are rendered onto the page
//! as a visible error state and never retried.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// Every domain error converts into `AppError` via `From`, so `main` can use `?`
/// throughout.
#[derive(Debug, Error)]
pub enum AppError {
    /// The transcript could not be loaded.
    ///
    /// By the time this reaches `main` the error page has already been produced.
    #[error("Failed to load transcript: {0}")]
    Load(#[from] LoadError),

    /// Configuration file exists but could not be used.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Rendered pages could not be written.
    #[error("Export error: {0}")]
    Export(#[from] crate::view::ExportError),

    /// Writing the page to stdout failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when fetching a transcript.
///
/// Every variant carries the requested location so the error page can tell the
/// user which path was wrong.
///
/// # Examples
///
/// ```
/// use transcript_stepper::model::error::LoadError;
///
/// let err = LoadError::Status {
///     path: "claude.jsonl".to_string(),
///     status: 404,
/// };
/// assert!(err.to_string().contains("404"));
/// assert!(err.to_string().contains("claude.jsonl"));
/// ```
#[derive(Debug, Error)]
pub enum LoadError {
    /// The transport answered with a non-success status.
    #[error("HTTP error! Status: {status} - Check that the file path \"{path}\" is correct.")]
    Status {
        /// Requested location (URL as given by the user).
        path: String,
        /// HTTP status code of the response.
        status: u16,
    },

    /// The transcript file does not exist.
    #[error("File not found: {} - Check that the file path is correct.", path.display())]
    NotFound {
        /// Filesystem path that was attempted.
        path: PathBuf,
    },

    /// Reading the file or stdin failed.
    #[error("Failed to read \"{}\": {source}", path.display())]
    Io {
        /// Path that failed to read (`-` for stdin).
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The request never produced a response (DNS, connection refused, TLS, body read).
    #[error("Could not fetch \"{path}\": {reason}")]
    Transport {
        /// Requested URL.
        path: String,
        /// Client error message.
        reason: String,
    },
}

/// A transcript line that could not be decoded.
///
/// Recovered locally by the loader: the line is dropped and logged at debug level.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The line is not valid JSON, or not a JSON shape a record can be read from.
    #[error("Invalid JSON at line {line}: {message}")]
    InvalidJson {
        /// 1-based line number in the trimmed transcript text.
        line: usize,
        /// `serde_json` error message.
        message: String,
    },
}

impl DecodeError {
    /// Line number the error refers to.
    pub fn line(&self) -> usize {
        match self {
            DecodeError::InvalidJson { line, .. } => *line,
        }
    }
}
