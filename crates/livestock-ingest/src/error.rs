//! Error types for raw data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the raw input table.
///
/// All of these are fatal: the pipeline stops and no output is written.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input uses an encoding the reader does not support.
    #[error("unsupported encoding {encoding} in {path} (expected UTF-8)")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    // === Schema Errors ===
    /// One or more of `Area`, `Item`, `Element` is absent.
    #[error("CSV missing columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// No header matched the year-column pattern.
    #[error("no year columns found (expected headers like 'Y2010', 'Y2018')")]
    NoYearColumns,

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    /// Extracted rows did not line up with the detected year columns.
    #[error(transparent)]
    Model(#[from] livestock_model::ModelError),
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
