//! Error types for the preprocessing core.

use std::path::PathBuf;

use livestock_ingest::IngestError;
use thiserror::Error;

/// Fatal preprocessing errors. Row-level drops are not errors.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The raw input could not be read or lacks required columns.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// The reshaper was handed a table without year columns.
    #[error("no year columns found (expected headers like 'Y2010', 'Y2018')")]
    NoYearColumns,

    /// No metric could be derived from the input.
    #[error("nothing to write: no Stocks, CH4 or N2O rows remained after filtering")]
    EmptyResult,

    /// Writing the prepared output failed.
    #[error("failed to write output {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for preprocessing operations.
pub type Result<T> = std::result::Result<T, TransformError>;
