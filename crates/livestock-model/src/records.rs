//! Record types flowing through the preparation pipeline.
//!
//! Each stage consumes one of these tables and produces the next; nothing
//! is mutated in place after it has been appended.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::enums::{ElementCode, ItemKind, Metric};
use crate::error::{ModelError, Result};

/// A year column detected in the raw input header (e.g. `Y2020`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearColumn {
    /// Header as it appears in the file.
    pub name: String,
    /// Calendar year parsed from the header.
    pub year: i32,
}

impl YearColumn {
    pub fn new(name: impl Into<String>, year: i32) -> Self {
        Self {
            name: name.into(),
            year,
        }
    }
}

/// One raw input row: a (country, item, element) line with one value per
/// year column. Values are `None` when the cell is empty or non-numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub area: String,
    pub item: String,
    pub element: String,
    pub values: Vec<Option<f64>>,
}

impl RawRecord {
    pub fn new(
        area: impl Into<String>,
        item: impl Into<String>,
        element: impl Into<String>,
        values: Vec<Option<f64>>,
    ) -> Self {
        Self {
            area: area.into(),
            item: item.into(),
            element: element.into(),
            values,
        }
    }
}

/// The raw wide-format table: year columns plus rows aligned to them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    year_columns: Vec<YearColumn>,
    records: Vec<RawRecord>,
}

impl RawTable {
    /// Build a table, checking every row carries one value per year column.
    pub fn new(year_columns: Vec<YearColumn>, records: Vec<RawRecord>) -> Result<Self> {
        let expected = year_columns.len();
        if let Some(bad) = records.iter().find(|record| record.values.len() != expected) {
            return Err(ModelError::YearWidthMismatch {
                expected,
                actual: bad.values.len(),
            });
        }
        Ok(Self {
            year_columns,
            records,
        })
    }

    pub fn year_columns(&self) -> &[YearColumn] {
        &self.year_columns
    }

    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A long-format row after classification, element normalization and
/// unpivoting: one value for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub area: String,
    pub item: String,
    /// Original element label, kept for auditing.
    pub element: String,
    pub element_norm: ElementCode,
    pub item_kind: ItemKind,
    pub year: i32,
    pub value: Option<f64>,
}

/// Grouping key shared by the metric stages.
///
/// The flags `is_all_animals` / `is_atomic` are derived from `item_kind`,
/// so the kind alone completes the key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MetricKey {
    pub area: String,
    pub item: String,
    pub year: i32,
    pub item_kind: ItemKind,
}

/// One output row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub area: String,
    pub item: String,
    pub year: i32,
    pub metric: Metric,
    pub value: Option<f64>,
    pub item_kind: ItemKind,
}

impl MetricRecord {
    pub fn from_key(key: MetricKey, metric: Metric, value: Option<f64>) -> Self {
        Self {
            area: key.area,
            item: key.item,
            year: key.year,
            metric,
            value,
            item_kind: key.item_kind,
        }
    }

    pub fn is_all_animals(&self) -> bool {
        self.item_kind.is_all_animals()
    }

    pub fn is_atomic(&self) -> bool {
        self.item_kind.is_atomic()
    }

    /// Output ordering: (Area, Item, Year, Metric), lexical on strings.
    pub fn output_order(&self, other: &Self) -> Ordering {
        self.area
            .cmp(&other.area)
            .then_with(|| self.item.cmp(&other.item))
            .then_with(|| self.year.cmp(&other.year))
            .then_with(|| self.metric.cmp(&other.metric))
    }
}
