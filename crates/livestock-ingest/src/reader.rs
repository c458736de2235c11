//! CSV file reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use livestock_model::RawTable;
use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::extract::extract_raw_table;

fn open_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Check the input exists, is a file, and is not UTF-16 encoded.
///
/// UTF-8 with or without BOM is accepted.
pub fn check_input_file(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;
    if !metadata.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }
    Ok(())
}

/// Read the input CSV into a Polars DataFrame.
///
/// Every column is read as text (schema inference disabled) so that year
/// columns holding a stray flag or blank never fail the whole read; values
/// are parsed to numbers during extraction.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    check_input_file(path)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.height() == 0 {
        warn!(path = %path.display(), "input has a header but no rows");
    }
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "input loaded"
    );
    Ok(df)
}

/// Read the input CSV and extract the typed raw table in one step.
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    let df = read_csv_frame(path)?;
    extract_raw_table(&df)
}
