//! Wide-to-long reshaping.

use livestock_model::{NormalizedRecord, YearColumn};

use crate::classify::ClassifiedRow;
use crate::error::{Result, TransformError};

/// Unpivot selected rows: one output record per (row, year column).
///
/// Missing cells stay missing; nothing is dropped here. Output is
/// row-major, in year-column order within each row.
pub fn unpivot_years(
    rows: &[ClassifiedRow<'_>],
    year_columns: &[YearColumn],
) -> Result<Vec<NormalizedRecord>> {
    if year_columns.is_empty() {
        return Err(TransformError::NoYearColumns);
    }

    let mut long = Vec::with_capacity(rows.len() * year_columns.len());
    for row in rows {
        for (column, value) in year_columns.iter().zip(&row.record.values) {
            long.push(NormalizedRecord {
                area: row.record.area.clone(),
                item: row.record.item.clone(),
                element: row.record.element.clone(),
                element_norm: row.element_norm,
                item_kind: row.item_kind,
                year: column.year,
                value: *value,
            });
        }
    }
    Ok(long)
}
