//! Error types for wordkit-core.

use std::path::PathBuf;

use thiserror::Error;

/// Domain-specific errors for wordkit operations.
#[derive(Error, Debug)]
pub enum WordkitError {
    /// The requested word length is below zero.
    ///
    /// Zero itself is accepted; only negative values are rejected.
    #[error("--len \"{0}\" must be > 0")]
    NegativeLength(i64),

    /// An input file could not be opened.
    #[error("can't open '{}': {source}", .path.display())]
    Open {
        /// The path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An opened input could not be read to the end.
    #[error("failed to read '{path}': {source}")]
    Read {
        /// Label of the input being read (a path, or `<input N>`).
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The scan completed but nothing matched the requested length.
    #[error("Found no words of length {0}!")]
    NoMatches(usize),
}

impl WordkitError {
    /// Whether this error belongs to argument validation (reported as a
    /// usage error before any output) rather than to the scan itself.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::NegativeLength(_) | Self::Open { .. })
    }
}
