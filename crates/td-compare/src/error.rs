//! Errors raised while comparing result files.
//!
//! A missing input file is not an error here: it is reported through
//! [`Outcome::Missing`](crate::diff::Outcome::Missing) so the remaining
//! comparisons still run.

use std::path::PathBuf;

use thiserror::Error;

/// Comparison errors
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("Could not read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File '{path}' is not valid UTF-8")]
    InvalidUtf8 { path: PathBuf },

    #[error("Could not write report output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Could not write summary to '{path}': {reason}")]
    Summary { path: PathBuf, reason: String },
}

impl CompareError {
    /// Path of the file involved, when the error is tied to one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            CompareError::Read { path, .. }
            | CompareError::InvalidUtf8 { path }
            | CompareError::Summary { path, .. } => Some(path),
            CompareError::Output(_) => None,
        }
    }
}
