use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use livestock_model::{Metric, PrepareOptions};
use livestock_transform::PrepareReport;

use crate::types::PrepareRun;

pub fn print_summary(run: &PrepareRun) {
    println!("{}", render_run_header(run));
    println!("{}", metric_table(&run.report));
    if !run.report.regions.is_empty() {
        println!();
        println!("Regions:");
        println!("{}", region_table(&run.report));
    }
}

/// Plain-text run description printed above the tables.
pub fn render_run_header(run: &PrepareRun) -> String {
    let report = &run.report;
    let filter = &report.filter;
    let factors = run.options.gwp.factors();

    let output = if run.written {
        format!("Output: {}", run.output.display())
    } else {
        format!("Output: {} (dry run, not written)", run.output.display())
    };
    let mut gwp = format!(
        "GWP: {} (CH4 x {}, N2O x {})",
        run.options.gwp, factors.ch4, factors.n2o
    );
    if let Some(requested) = &run.gwp_fallback_from {
        gwp.push_str(&format!(" [unknown '{requested}', using default]"));
    }

    [
        format!("Input: {}", run.input.display()),
        output,
        format!(
            "Standards: {} ({})",
            report.standards_version, run.standards_source
        ),
        gwp,
        format!("Options: {}", describe_options(&run.options)),
        format!(
            "Rows: {} read, {} excluded, {} unrecognized element, {} gas filtered",
            filter.input_rows,
            filter.excluded_items,
            filter.unrecognized_elements,
            filter.filtered_gas_rows
        ),
        format!("Years: {}", describe_years(&report.years)),
    ]
    .join("\n")
}

fn describe_options(options: &PrepareOptions) -> String {
    format!(
        "split_cattle={}, dairy_share={}%, only_livestock_total={}",
        options.split_cattle, options.dairy_share_percent, options.only_livestock_total
    )
}

fn describe_years(years: &[i32]) -> String {
    let columns = if years.len() == 1 { "column" } else { "columns" };
    match (years.iter().min(), years.iter().max()) {
        (Some(first), Some(last)) if first == last => {
            format!("{first} ({} {columns})", years.len())
        }
        (Some(first), Some(last)) => format!("{first}-{last} ({} {columns})", years.len()),
        _ => "none".to_string(),
    }
}

/// Per-metric row counts for country rows, with region and output totals.
pub fn metric_table(report: &PrepareReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    for metric in Metric::ALL {
        let count = report.metric_rows.get(&metric).copied().unwrap_or(0);
        let count_cell = if count == 0 {
            dim_cell(count)
        } else {
            Cell::new(count)
        };
        table.add_row(vec![Cell::new(metric.as_str()), count_cell]);
    }
    let region_rows: usize = report.regions.iter().map(|region| region.rows).sum();
    table.add_row(vec![dim_cell("Region totals"), dim_cell(region_rows)]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.output_rows).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Regions that produced group totals.
pub fn region_table(report: &PrepareReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Region"),
        header_cell("Countries"),
        header_cell("Rows"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for region in &report.regions {
        table.add_row(vec![
            Cell::new(&region.label),
            Cell::new(region.countries),
            Cell::new(region.rows),
        ]);
    }
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    use livestock_model::GwpSet;
    use livestock_transform::{EmittedRegion, RowFilterStats};

    use super::*;

    fn run() -> PrepareRun {
        PrepareRun {
            input: PathBuf::from("data/raw.csv"),
            output: PathBuf::from("data/livestock_PREPARED_long.csv"),
            written: true,
            options: PrepareOptions::default(),
            gwp_fallback_from: None,
            standards_source: "embedded".to_string(),
            report: PrepareReport {
                standards_version: "v3e".to_string(),
                gwp: GwpSet::Ar6NoCcf,
                years: vec![2019, 2020],
                filter: RowFilterStats {
                    input_rows: 5,
                    excluded_items: 1,
                    unrecognized_elements: 1,
                    filtered_gas_rows: 0,
                    unlisted_items: 0,
                    kept_rows: 3,
                },
                long_rows: 6,
                metric_rows: BTreeMap::from([
                    (Metric::Stocks, 2),
                    (Metric::Lsu, 3),
                    (Metric::Ch4Co2e, 2),
                    (Metric::TotalCo2e, 2),
                ]),
                regions: vec![EmittedRegion {
                    label: "EU (group total)".to_string(),
                    countries: 1,
                    rows: 9,
                }],
                output_rows: 18,
            },
        }
    }

    #[test]
    fn test_run_header() {
        insta::assert_snapshot!(render_run_header(&run()), @r"
        Input: data/raw.csv
        Output: data/livestock_PREPARED_long.csv
        Standards: v3e (embedded)
        GWP: AR6_NOCCF (CH4 x 27.2, N2O x 273)
        Options: split_cattle=true, dairy_share=35%, only_livestock_total=true
        Rows: 5 read, 1 excluded, 1 unrecognized element, 0 gas filtered
        Years: 2019-2020 (2 columns)
        ");
    }

    #[test]
    fn test_run_header_dry_run_with_fallback() {
        let mut run = run();
        run.written = false;
        run.gwp_fallback_from = Some("AR7".to_string());
        run.report.years = vec![2020];
        let header = render_run_header(&run);
        assert!(header.contains("(dry run, not written)"));
        assert!(header.contains("[unknown 'AR7', using default]"));
        assert!(header.contains("Years: 2020 (1 column)"));
    }

    #[test]
    fn test_metric_table_counts() {
        let rendered = metric_table(&run().report).to_string();
        for metric in Metric::ALL {
            assert!(rendered.contains(metric.as_str()), "{metric} missing");
        }
        assert!(rendered.contains("Region totals"));
        assert!(rendered.contains("18"));
    }

    #[test]
    fn test_region_table() {
        let rendered = region_table(&run().report).to_string();
        assert!(rendered.contains("EU (group total)"));
    }
}
