//! Dairy / other split of cattle stocks ahead of the LSU calculation.

use std::sync::LazyLock;

use livestock_model::{ItemKind, MetricRecord, PrepareOptions};
use regex::{NoExpand, Regex};

pub const DAIRY_LABEL: &str = "Cattle (dairy)";
pub const OTHER_LABEL: &str = "Cattle (other)";

static CATTLE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)cattle").expect("Invalid cattle regex"));

/// Returns true if the item label contains "cattle" or "bovine".
pub fn looks_like_cattle(item: &str) -> bool {
    let lower = item.to_lowercase();
    lower.contains("cattle") || lower.contains("bovine")
}

/// Splits each cattle stock row into a dairy share and the remainder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CattleSplit {
    dairy_fraction: f64,
}

impl CattleSplit {
    /// Build a split from a fraction in `[0, 1]`. Out-of-range values are
    /// clamped; NaN is treated as 0.
    pub fn new(dairy_fraction: f64) -> Self {
        let dairy_fraction = if dairy_fraction.is_nan() {
            0.0
        } else {
            dairy_fraction.clamp(0.0, 1.0)
        };
        Self { dairy_fraction }
    }

    /// The configured split, or `None` when splitting is disabled.
    pub fn from_options(options: &PrepareOptions) -> Option<Self> {
        options
            .split_cattle
            .then(|| Self::new(options.dairy_fraction()))
    }

    pub fn dairy_fraction(&self) -> f64 {
        self.dairy_fraction
    }

    /// Replace every cattle row by a dairy row (`value * f`) and an other
    /// row (`value * (1 - f)`). Non-cattle rows pass through unchanged.
    ///
    /// Split rows are atomic. Every "cattle" occurrence in the label is
    /// replaced, case-insensitively; labels matching only "bovine" keep
    /// their text, so both halves share the original label.
    pub fn apply(&self, stocks: &[MetricRecord]) -> Vec<MetricRecord> {
        let mut out = Vec::with_capacity(stocks.len() * 2);
        for record in stocks {
            if !looks_like_cattle(&record.item) {
                out.push(record.clone());
                continue;
            }
            out.push(share(record, DAIRY_LABEL, self.dairy_fraction));
            out.push(share(record, OTHER_LABEL, 1.0 - self.dairy_fraction));
        }
        out
    }
}

fn share(record: &MetricRecord, label: &str, fraction: f64) -> MetricRecord {
    MetricRecord {
        item: CATTLE_WORD
            .replace_all(&record.item, NoExpand(label))
            .into_owned(),
        value: record.value.map(|value| value * fraction),
        item_kind: ItemKind::Atomic,
        ..record.clone()
    }
}
