//! Error types for the data-loader crate.
//!
//! Loading is the only fallible step in the whole system. Once a
//! `Catalog` exists, every query against it is total.

use thiserror::Error;

/// Errors that can occur while loading the movie catalog.
///
/// All of these are fatal at startup: without a catalog there is
/// nothing to query, so callers should surface them as "service
/// unavailable" rather than as an empty result.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the catalog
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The input could not be decoded as a sequence of movie records
    ///
    /// `line` and `column` point at the offending JSON token (1-based).
    /// `reason` already carries the position in human-readable form.
    #[error("Parse error in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        column: usize,
        reason: String,
    },
}

impl DataLoadError {
    /// Wrap a serde_json failure with the name of the source it came from.
    pub(crate) fn from_json(file: impl Into<String>, err: serde_json::Error) -> Self {
        if err.is_io() {
            return DataLoadError::IoError(err.into());
        }
        DataLoadError::ParseError {
            file: file.into(),
            line: err.line(),
            column: err.column(),
            reason: err.to_string(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
