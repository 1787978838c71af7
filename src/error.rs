//! Error types.
//!
//! Row-level problems never abort a parse. They are collected as
//! [`RowIssue`]s next to the records that did load, so the caller can
//! report a skipped-row count. [`ViewerError`] covers the front-end
//! failures that happen before or after the pipeline runs.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// What went wrong with a single data row.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// The row did not split into the expected number of fields.
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// The year column is not an integer.
    #[error("invalid year '{0}'")]
    InvalidYear(String),

    /// A count column is not a non-negative integer; the row was kept with 0.
    #[error("non-numeric {field} value '{value}', using 0")]
    NonNumeric { field: &'static str, value: String },
}

impl RowError {
    /// Whether the row was dropped because of this error.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, RowError::NonNumeric { .. })
    }
}

/// A [`RowError`] tied to its 1-based line in the source text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {error}")]
pub struct RowIssue {
    pub line: usize,
    pub error: RowError,
}

/// Front-end errors.
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("data unavailable: cannot read '{}': {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unknown month '{0}' (expected a full English month name)")]
    InvalidMonth(String),

    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),

    #[error("cannot serialise page: {0}")]
    Serialize(#[from] serde_json::Error),
}
