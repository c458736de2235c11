//! End-to-end preparation of a raw table into the long metric table.
//!
//! 1. Select rows (exclusions, element normalization, livestock-total filter)
//! 2. Unpivot year columns
//! 3. Compute Stocks, CO2e and LSU metrics
//! 4. Append region group totals
//! 5. Sort by (Area, Item, Year, Metric)

use std::collections::BTreeMap;
use std::time::Instant;

use livestock_ingest::extract_raw_table;
use livestock_model::{GwpSet, Metric, MetricRecord, PrepareOptions, RawTable};
use livestock_standards::Standards;
use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::classify::{RowFilterStats, classify_records};
use crate::error::{Result, TransformError};
use crate::metrics::MetricCalculator;
use crate::output::build_output_frame;
use crate::regions::{EmittedRegion, RegionAggregator};
use crate::reshape::unpivot_years;
use crate::taxonomy::Taxonomy;

/// What happened during a run, for the CLI summary and logs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrepareReport {
    pub standards_version: String,
    pub gwp: GwpSet,
    /// Years covered by the input, in column order.
    pub years: Vec<i32>,
    pub filter: RowFilterStats,
    /// Rows after unpivoting.
    pub long_rows: usize,
    /// Per-country rows for each metric, before region totals.
    pub metric_rows: BTreeMap<Metric, usize>,
    pub regions: Vec<EmittedRegion>,
    pub output_rows: usize,
}

/// Prepared records in output order, with the run report.
#[derive(Debug, Clone, PartialEq)]
pub struct PrepareOutput {
    pub records: Vec<MetricRecord>,
    pub report: PrepareReport,
}

/// Prepare a raw table.
///
/// Fails with [`TransformError::NoYearColumns`] when the table has no year
/// columns and with [`TransformError::EmptyResult`] when no metric can be
/// derived. Regions are computed after the per-country metrics, from those
/// rows only.
pub fn prepare(
    raw: &RawTable,
    standards: &Standards,
    options: &PrepareOptions,
) -> Result<PrepareOutput> {
    let prepare_span = info_span!(
        "prepare",
        gwp = %options.gwp,
        standards_version = %standards.version,
        input_rows = raw.len()
    );
    let _prepare_guard = prepare_span.enter();
    let prepare_start = Instant::now();

    if raw.year_columns().is_empty() {
        return Err(TransformError::NoYearColumns);
    }

    let taxonomy = Taxonomy::from_standards(standards);
    let (rows, filter) = classify_records(raw.records(), &taxonomy, options);
    debug!(
        excluded_items = filter.excluded_items,
        unrecognized_elements = filter.unrecognized_elements,
        filtered_gas_rows = filter.filtered_gas_rows,
        kept_rows = filter.kept_rows,
        "row selection complete"
    );

    let long = unpivot_years(&rows, raw.year_columns())?;

    let mut records = info_span!("metrics").in_scope(|| {
        let start = Instant::now();
        let records = MetricCalculator::from_options(options).compute(&long);
        debug!(
            long_rows = long.len(),
            metric_rows = records.len(),
            split_cattle = options.split_cattle,
            duration_ms = start.elapsed().as_millis(),
            "metrics complete"
        );
        records
    });
    if records.is_empty() {
        return Err(TransformError::EmptyResult);
    }

    let mut metric_rows = BTreeMap::new();
    for record in &records {
        *metric_rows.entry(record.metric).or_insert(0) += 1;
    }

    let regions = info_span!("regions").in_scope(|| {
        let aggregation = RegionAggregator::new(&standards.regions).aggregate(&records);
        debug!(
            regions = aggregation.emitted.len(),
            region_rows = aggregation.records.len(),
            "region totals complete"
        );
        aggregation
    });
    records.extend(regions.records);
    records.sort_by(MetricRecord::output_order);

    let report = PrepareReport {
        standards_version: standards.version.clone(),
        gwp: options.gwp,
        years: raw.year_columns().iter().map(|column| column.year).collect(),
        filter,
        long_rows: long.len(),
        metric_rows,
        regions: regions.emitted,
        output_rows: records.len(),
    };
    info!(
        output_rows = report.output_rows,
        regions = report.regions.len(),
        duration_ms = prepare_start.elapsed().as_millis(),
        "preparation complete"
    );

    Ok(PrepareOutput { records, report })
}

/// Prepare a raw frame as read from the input CSV and return the output
/// frame.
pub fn prepare_frame(
    df: &DataFrame,
    standards: &Standards,
    options: &PrepareOptions,
) -> Result<(DataFrame, PrepareReport)> {
    let raw = extract_raw_table(df)?;
    let output = prepare(&raw, standards, options)?;
    let frame = build_output_frame(&output.records)?;
    Ok((frame, output.report))
}
