//! Conversion of a raw Polars frame into a typed [`RawTable`].

use livestock_common::{any_to_f64, any_to_string};
use livestock_model::{RawRecord, RawTable};
use polars::prelude::{AnyValue, Column, DataFrame};
use tracing::debug;

use crate::columns::resolve_layout;
use crate::error::Result;

fn cell_text(column: &Column, idx: usize) -> String {
    any_to_string(column.get(idx).unwrap_or(AnyValue::Null))
        .trim()
        .to_string()
}

fn cell_number(column: &Column, idx: usize) -> Option<f64> {
    any_to_f64(column.get(idx).unwrap_or(AnyValue::Null))
}

/// Build a [`RawTable`] from a wide-format frame.
///
/// `Area`, `Item` and `Element` values are trimmed; year cells that are
/// empty or not numeric become `None`. The frame itself is not modified.
///
/// # Errors
///
/// Fails when a required column or every year column is missing.
pub fn extract_raw_table(df: &DataFrame) -> Result<RawTable> {
    let headers: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let layout = resolve_layout(&headers)?;

    let area = df.column(&layout.area)?;
    let item = df.column(&layout.item)?;
    let element = df.column(&layout.element)?;
    let year_columns: Vec<&Column> = layout
        .year_columns
        .iter()
        .map(|year| df.column(&year.name))
        .collect::<std::result::Result<_, _>>()?;

    let mut records = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let values = year_columns
            .iter()
            .map(|column| cell_number(column, idx))
            .collect();
        records.push(RawRecord::new(
            cell_text(area, idx),
            cell_text(item, idx),
            cell_text(element, idx),
            values,
        ));
    }

    debug!(
        rows = records.len(),
        year_columns = layout.year_columns.len(),
        "raw table extracted"
    );
    Ok(RawTable::new(layout.year_columns, records)?)
}
