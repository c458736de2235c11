//! Region group totals.
//!
//! Each region sums its member countries that are actually present in the
//! per-country output. Regions may overlap (a country can count towards
//! "EU" and "Europe"); every region is computed independently from the
//! per-country rows, never from another region's totals.

use std::collections::{BTreeMap, BTreeSet};

use livestock_model::{ItemKind, Metric, MetricRecord};
use livestock_standards::Region;
use serde::Serialize;
use tracing::debug;

/// A region that produced group totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmittedRegion {
    pub label: String,
    /// Member countries found in the data.
    pub countries: usize,
    pub rows: usize,
}

/// Group-total rows for all regions, in region order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionAggregation {
    pub records: Vec<MetricRecord>,
    pub emitted: Vec<EmittedRegion>,
}

/// Computes group totals over a fixed list of regions.
#[derive(Debug, Clone, Copy)]
pub struct RegionAggregator<'a> {
    regions: &'a [Region],
}

impl<'a> RegionAggregator<'a> {
    pub fn new(regions: &'a [Region]) -> Self {
        Self { regions }
    }

    /// Sum `records` per region over (item, year, metric, kind).
    ///
    /// Missing values are skipped; a group where every value is missing
    /// sums to 0.0. Regions with no member present are omitted.
    pub fn aggregate(&self, records: &[MetricRecord]) -> RegionAggregation {
        let available: BTreeSet<&str> = records.iter().map(|record| record.area.as_str()).collect();
        let mut aggregation = RegionAggregation::default();

        for region in self.regions {
            let present: BTreeSet<&str> = available
                .iter()
                .copied()
                .filter(|area| region.contains(area))
                .collect();
            if present.is_empty() {
                debug!(region = %region.label, "no member country present, skipping");
                continue;
            }

            let mut sums: BTreeMap<(&str, i32, Metric, ItemKind), f64> = BTreeMap::new();
            for record in records.iter().filter(|record| present.contains(record.area.as_str())) {
                let key = (
                    record.item.as_str(),
                    record.year,
                    record.metric,
                    record.item_kind,
                );
                *sums.entry(key).or_insert(0.0) += record.value.unwrap_or(0.0);
            }

            aggregation.emitted.push(EmittedRegion {
                label: region.label.clone(),
                countries: present.len(),
                rows: sums.len(),
            });
            aggregation
                .records
                .extend(sums.into_iter().map(|((item, year, metric, item_kind), value)| {
                    MetricRecord {
                        area: region.label.clone(),
                        item: item.to_string(),
                        year,
                        metric,
                        value: Some(value),
                        item_kind,
                    }
                }));
        }

        aggregation
    }
}
