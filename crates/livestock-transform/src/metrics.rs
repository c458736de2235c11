//! Metric calculation: Stocks, CO2-equivalent emissions and livestock units.

use std::collections::BTreeMap;

use livestock_model::{
    ElementCode, GwpFactors, GwpSet, Metric, MetricKey, MetricRecord, NormalizedRecord,
    PrepareOptions,
};

use crate::cattle::CattleSplit;

/// LSU weight for species no rule recognizes.
pub const DEFAULT_LSU_WEIGHT: f64 = 1.0;

/// A livestock-unit coefficient for one species family.
struct LsuRule {
    matches: fn(&str) -> bool,
    weight: f64,
}

fn is_bovine(label: &str) -> bool {
    label.contains("cattle") || label.contains("bovine")
}

fn is_dairy_bovine(label: &str) -> bool {
    label.contains("dairy") && is_bovine(label)
}

fn is_buffalo(label: &str) -> bool {
    label.contains("buffalo")
}

fn is_small_ruminant(label: &str) -> bool {
    label.contains("sheep") || label.contains("goat")
}

fn is_pig(label: &str) -> bool {
    label.contains("pig") || label.contains("swine")
}

fn is_poultry(label: &str) -> bool {
    ["poultry", "chicken", "turkey", "duck"]
        .iter()
        .any(|word| label.contains(word))
}

fn is_equine(label: &str) -> bool {
    label.contains("horse") || label.contains("equid")
}

/// Ordered by specificity; the first match wins.
const LSU_RULES: &[LsuRule] = &[
    LsuRule {
        matches: is_dairy_bovine,
        weight: 1.0,
    },
    LsuRule {
        matches: is_bovine,
        weight: 0.8,
    },
    LsuRule {
        matches: is_buffalo,
        weight: 1.0,
    },
    LsuRule {
        matches: is_small_ruminant,
        weight: 0.1,
    },
    LsuRule {
        matches: is_pig,
        weight: 0.3,
    },
    LsuRule {
        matches: is_poultry,
        weight: 0.01,
    },
    LsuRule {
        matches: is_equine,
        weight: 0.8,
    },
];

/// Livestock-unit coefficient for an item label (case-insensitive
/// substring rules).
pub fn lsu_weight(item: &str) -> f64 {
    let label = item.to_lowercase();
    LSU_RULES
        .iter()
        .find(|rule| (rule.matches)(&label))
        .map_or(DEFAULT_LSU_WEIGHT, |rule| rule.weight)
}

/// Derives the output metrics from long-format records.
#[derive(Debug, Clone, Copy)]
pub struct MetricCalculator {
    factors: GwpFactors,
    split: Option<CattleSplit>,
}

impl MetricCalculator {
    pub fn new(gwp: GwpSet, split: Option<CattleSplit>) -> Self {
        Self {
            factors: gwp.factors(),
            split,
        }
    }

    pub fn from_options(options: &PrepareOptions) -> Self {
        Self::new(options.gwp, CattleSplit::from_options(options))
    }

    /// All metrics, in stage order: Stocks, CH4_CO2e, N2O_CO2e, Total_CO2e,
    /// LSU. A metric with no source rows contributes nothing.
    pub fn compute(&self, long: &[NormalizedRecord]) -> Vec<MetricRecord> {
        let stocks = stock_records(long);
        let ch4 = gas_sums(long, ElementCode::Ch4, self.factors.ch4);
        let n2o = gas_sums(long, ElementCode::N2o, self.factors.n2o);

        let mut out = Vec::new();
        out.extend(gas_records(&ch4, Metric::Ch4Co2e));
        out.extend(gas_records(&n2o, Metric::N2oCo2e));
        if !ch4.is_empty() || !n2o.is_empty() {
            out.extend(total_co2e(&ch4, &n2o));
        }
        if !stocks.is_empty() {
            out.extend(self.lsu(&stocks));
        }
        let mut records = stocks;
        records.append(&mut out);
        records
    }

    /// LSU rows from Stocks rows, after the cattle split when enabled.
    /// Missing stock values stay missing.
    pub fn lsu(&self, stocks: &[MetricRecord]) -> Vec<MetricRecord> {
        let source = match &self.split {
            Some(split) => split.apply(stocks),
            None => stocks.to_vec(),
        };
        source
            .into_iter()
            .map(|record| MetricRecord {
                metric: Metric::Lsu,
                value: record.value.map(|value| value * lsu_weight(&record.item)),
                ..record
            })
            .collect()
    }
}

/// Stocks rows copied through as the `Stocks` metric. Duplicates are kept.
pub fn stock_records(long: &[NormalizedRecord]) -> Vec<MetricRecord> {
    long.iter()
        .filter(|record| record.element_norm == ElementCode::Stocks)
        .map(|record| MetricRecord {
            area: record.area.clone(),
            item: record.item.clone(),
            year: record.year,
            metric: Metric::Stocks,
            value: record.value,
            item_kind: record.item_kind,
        })
        .collect()
}

/// Sum `value * factor` over all rows of one gas, grouped by
/// (area, item, year, kind). Missing values count as zero, so a group of
/// only missing values sums to 0.0.
pub fn gas_sums(
    long: &[NormalizedRecord],
    element: ElementCode,
    factor: f64,
) -> BTreeMap<MetricKey, f64> {
    let mut sums = BTreeMap::new();
    for record in long.iter().filter(|record| record.element_norm == element) {
        let key = MetricKey {
            area: record.area.clone(),
            item: record.item.clone(),
            year: record.year,
            item_kind: record.item_kind,
        };
        *sums.entry(key).or_insert(0.0) += record.value.map_or(0.0, |value| value * factor);
    }
    sums
}

fn gas_records(sums: &BTreeMap<MetricKey, f64>, metric: Metric) -> Vec<MetricRecord> {
    sums.iter()
        .map(|(key, value)| MetricRecord::from_key(key.clone(), metric, Some(*value)))
        .collect()
}

/// `Total_CO2e` over the union of keys; a gas absent for a key counts as 0.
pub fn total_co2e(
    ch4: &BTreeMap<MetricKey, f64>,
    n2o: &BTreeMap<MetricKey, f64>,
) -> Vec<MetricRecord> {
    let mut totals = ch4.clone();
    for (key, value) in n2o {
        *totals.entry(key.clone()).or_insert(0.0) += value;
    }
    gas_records(&totals, Metric::TotalCo2e)
}
