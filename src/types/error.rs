//! Error types for the Sales Analytics Engine
//!
//! This module defines the fatal error type returned by the outer I/O and
//! orchestration layers. The pipeline itself distinguishes three failure
//! tiers, and only the first one is an error in the Rust sense:
//!
//! - **Fatal errors** (file missing, unreadable catalog, write failures):
//!   surfaced through [`AnalyticsError`] and `?`.
//! - **Unparseable feed lines**: silently omitted by the parser, never an
//!   error value.
//! - **Invalid-but-parseable records**: counted by the validator, never an
//!   error value.

use thiserror::Error;

/// Fatal error for the analytics pipeline's outer layers
///
/// Every variant carries enough context to be printed as a one-line CLI
/// diagnostic. Recoverable conditions (bad lines, unmatched catalog
/// lookups, empty aggregation inputs) are deliberately not represented
/// here.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Input file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading the feed or writing an output file
    #[error("I/O error: {message}")]
    Io {
        /// Description of the underlying I/O failure
        message: String,
    },

    /// Product catalog document could not be parsed as JSON
    #[error("Invalid product catalog: {message}")]
    Catalog {
        /// Description of the JSON parse failure
        message: String,
    },

    /// Enriched-record dump could not be written
    #[error("Failed to write enriched dump: {message}")]
    Dump {
        /// Description of the delimited-writer failure
        message: String,
    },
}

impl From<std::io::Error> for AnalyticsError {
    fn from(error: std::io::Error) -> Self {
        AnalyticsError::Io {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for AnalyticsError {
    fn from(error: serde_json::Error) -> Self {
        AnalyticsError::Catalog {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for AnalyticsError {
    fn from(error: csv::Error) -> Self {
        AnalyticsError::Dump {
            message: error.to_string(),
        }
    }
}

impl AnalyticsError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        AnalyticsError::FileNotFound { path: path.into() }
    }
}
