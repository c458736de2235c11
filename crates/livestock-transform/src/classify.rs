//! Row selection: exclusion, element normalization and the livestock-total
//! filter, applied to wide rows before reshaping.

use livestock_model::{ElementCode, ItemKind, PrepareOptions, RawRecord};
use serde::Serialize;
use tracing::debug;

use crate::element::{is_livestock_total, normalize_element};
use crate::taxonomy::Taxonomy;

/// A wide row that survived selection, with its normalized element and
/// item tier.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRow<'a> {
    pub record: &'a RawRecord,
    pub element_norm: ElementCode,
    pub item_kind: ItemKind,
}

/// Counts of rows dropped at each selection step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RowFilterStats {
    pub input_rows: usize,
    /// Rows whose item is on the exclusion list.
    pub excluded_items: usize,
    /// Rows whose element label matched no rule.
    pub unrecognized_elements: usize,
    /// Gas rows dropped by the livestock-total filter.
    pub filtered_gas_rows: usize,
    /// Kept rows whose item is on no taxonomy list (classified atomic).
    pub unlisted_items: usize,
    pub kept_rows: usize,
}

/// Select and classify raw rows.
///
/// Steps run in order: excluded items are dropped, element labels are
/// normalized (unrecognized rows dropped), and when
/// `only_livestock_total` is set, gas rows whose element label is not a
/// livestock-total series are dropped. Stocks rows are never affected by
/// that filter.
pub fn classify_records<'a>(
    records: &'a [RawRecord],
    taxonomy: &Taxonomy,
    options: &PrepareOptions,
) -> (Vec<ClassifiedRow<'a>>, RowFilterStats) {
    let mut stats = RowFilterStats {
        input_rows: records.len(),
        ..RowFilterStats::default()
    };
    let mut rows = Vec::with_capacity(records.len());

    for record in records {
        if taxonomy.is_excluded(&record.item) {
            stats.excluded_items += 1;
            continue;
        }

        let Some(element_norm) = normalize_element(&record.element) else {
            stats.unrecognized_elements += 1;
            continue;
        };

        if options.only_livestock_total
            && element_norm.is_gas()
            && !is_livestock_total(&record.element)
        {
            stats.filtered_gas_rows += 1;
            continue;
        }

        if !taxonomy.is_listed(&record.item) {
            debug!(item = %record.item, "item not in taxonomy, treated as atomic");
            stats.unlisted_items += 1;
        }

        rows.push(ClassifiedRow {
            record,
            element_norm,
            item_kind: taxonomy.classify(&record.item),
        });
    }

    stats.kept_rows = rows.len();
    (rows, stats)
}
