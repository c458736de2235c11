//! Output frame construction and CSV writing.

use std::fs::File;
use std::path::Path;

use livestock_model::MetricRecord;
use polars::prelude::{Column, CsvWriter, DataFrame, IntoColumn, NamedFrom, SerWriter, Series};
use tracing::info;

use crate::error::{Result, TransformError};

/// Output columns, in file order.
pub const OUTPUT_COLUMNS: [&str; 8] = [
    "Area",
    "Item",
    "Year",
    "Metric",
    "Value",
    "item_kind",
    "is_all_animals",
    "is_atomic",
];

/// Build the output frame from prepared records, preserving their order.
///
/// `Value` is nullable; missing values are written as empty cells.
pub fn build_output_frame(records: &[MetricRecord]) -> Result<DataFrame> {
    let areas: Vec<&str> = records.iter().map(|r| r.area.as_str()).collect();
    let items: Vec<&str> = records.iter().map(|r| r.item.as_str()).collect();
    let years: Vec<i32> = records.iter().map(|r| r.year).collect();
    let metrics: Vec<&str> = records.iter().map(|r| r.metric.as_str()).collect();
    let values: Vec<Option<f64>> = records.iter().map(|r| r.value).collect();
    let kinds: Vec<&str> = records.iter().map(|r| r.item_kind.as_str()).collect();
    let all_animals: Vec<bool> = records.iter().map(MetricRecord::is_all_animals).collect();
    let atomic: Vec<bool> = records.iter().map(MetricRecord::is_atomic).collect();

    let [area, item, year, metric, value, kind, is_all_animals, is_atomic] = OUTPUT_COLUMNS;
    let columns: Vec<Column> = vec![
        Series::new(area.into(), areas).into_column(),
        Series::new(item.into(), items).into_column(),
        Series::new(year.into(), years).into_column(),
        Series::new(metric.into(), metrics).into_column(),
        Series::new(value.into(), values).into_column(),
        Series::new(kind.into(), kinds).into_column(),
        Series::new(is_all_animals.into(), all_animals).into_column(),
        Series::new(is_atomic.into(), atomic).into_column(),
    ];
    Ok(DataFrame::new(columns)?)
}

/// Write the output frame as CSV with a header row, creating parent
/// directories as needed.
pub fn write_output_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| TransformError::OutputWrite {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let file = File::create(path).map_err(|source| TransformError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    CsvWriter::new(file).include_header(true).finish(df)?;
    info!(path = %path.display(), rows = df.height(), "wrote prepared output");
    Ok(())
}
