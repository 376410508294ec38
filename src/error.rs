//! Error types for leaves.

use std::path::PathBuf;

/// Errors that can occur while building a book.
///
/// Every stage fails fast: the first error aborts the build and is returned
/// with the path it concerns.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An input path is missing or unreadable.
    #[error("cannot read {}: {source}", path.display())]
    NotFound {
        /// The input path.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// An input is not valid JSON or lacks an expected field.
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        /// The input path.
        path: PathBuf,
        /// The decoder failure, with line and column.
        source: serde_json::Error,
    },

    /// The input is well-formed but degenerate (e.g. zero pages).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An output directory or file could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        /// The output path.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// An output value could not be encoded as JSON.
    #[error("cannot encode {}: {source}", path.display())]
    Encode {
        /// The output path the value was destined for.
        path: PathBuf,
        /// The encoder failure.
        source: serde_json::Error,
    },

    /// Invalid chunk size (must be > 0).
    #[error("invalid chunk size: {0} (must be > 0)")]
    InvalidChunkSize(usize),

    /// Markup tag name the cleaner cannot match on.
    #[error("invalid markup tag: {0:?}")]
    InvalidMarkupTag(String),

    /// Configuration could not be loaded or deserialized.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type for leaves operations.
pub type Result<T> = std::result::Result<T, Error>;
