//! Raw livestock statistics ingestion.
//!
//! This crate loads the wide-format input table (one row per country, item
//! and element; one column per year) into a Polars `DataFrame` and turns it
//! into a typed [`RawTable`](livestock_model::RawTable).
//!
//! # Features
//!
//! - **CSV Loading**: Read the input file with every column as text
//! - **Column Checks**: Required `Area`, `Item`, `Element` columns
//! - **Year Detection**: Headers of the form letter + four digits (`Y2020`)
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use livestock_ingest::{read_csv_frame, extract_raw_table};
//!
//! let df = read_csv_frame(Path::new("1_Donnees/Emissions_livestock.csv"))?;
//! let raw = extract_raw_table(&df)?;
//! ```

mod columns;
mod error;
mod extract;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Column Layout ===
pub use columns::{
    ColumnLayout, REQUIRED_COLUMNS, detect_year_columns, parse_year_header, resolve_layout,
};

// === Frame Extraction ===
pub use extract::extract_raw_table;

// === CSV Reading ===
pub use reader::{check_input_file, read_csv_frame, read_raw_table};
