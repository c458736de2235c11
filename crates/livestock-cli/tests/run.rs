//! End-to-end runs of the prepare command.

use std::fs;
use std::path::Path;

use clap::Parser;
use livestock_cli::cli::Cli;
use livestock_cli::commands::run_prepare;
use livestock_model::GwpSet;

const INPUT: &str = "\
Area,Item,Element,Y2019,Y2020
France,Cattle,Stocks,900,1000
France,Cattle,Livestock total (CH4),9,10
Germany,Sheep,Stocks,50,
France,Chickens,Stocks,1,1
";

fn write_input(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("raw.csv");
    fs::write(&path, content).unwrap();
    path
}

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["livestock-prep"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn test_default_output_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), INPUT);
    let cli = parse(&["--input", input.to_str().unwrap()]);

    let run = run_prepare(&cli.prepare).unwrap();
    let expected = dir.path().join("livestock_PREPARED_long.csv");
    assert_eq!(run.output, expected);
    assert!(run.written);
    assert_eq!(run.report.filter.excluded_items, 1);
    assert_eq!(run.report.years, vec![2019, 2020]);

    let text = fs::read_to_string(&expected).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("Area,Item,Year,Metric,Value,item_kind,is_all_animals,is_atomic")
    );
    assert_eq!(lines.count(), run.report.output_rows);
    let dairy = text
        .lines()
        .find(|line| line.starts_with("France,Cattle (dairy),2020,LSU,"))
        .unwrap();
    assert!(dairy.starts_with("France,Cattle (dairy),2020,LSU,350"), "{dairy}");
    assert!(dairy.ends_with(",atomic,false,true"), "{dairy}");
    assert!(text.contains("Germany,Sheep,2020,Stocks,,atomic,false,true"));
    assert!(!text.contains("Chickens"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), INPUT);
    let output = dir.path().join("out").join("prepared.csv");
    let cli = parse(&[
        "--input",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--dry-run",
    ]);

    let run = run_prepare(&cli.prepare).unwrap();
    assert!(!run.written);
    assert!(!output.exists());
}

#[test]
fn test_unknown_gwp_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), INPUT);
    let cli = parse(&["--input", input.to_str().unwrap(), "--gwp", "AR9", "--dry-run"]);

    let run = run_prepare(&cli.prepare).unwrap();
    assert_eq!(run.options.gwp, GwpSet::Ar6NoCcf);
    assert_eq!(run.gwp_fallback_from.as_deref(), Some("AR9"));
}

#[test]
fn test_missing_columns_fail_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "Area,Y2020\nFrance,1\n");
    let output = dir.path().join("prepared.csv");
    let cli = parse(&[
        "--input",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);

    let err = run_prepare(&cli.prepare).unwrap_err();
    assert!(
        format!("{err:#}").contains("CSV missing columns: Element, Item"),
        "{err:#}"
    );
    assert!(!output.exists());
}

#[test]
fn test_empty_result_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "Area,Item,Element,Y2020\nFrance,Mules and hinnies,Stocks,3\n",
    );
    let output = dir.path().join("prepared.csv");
    let cli = parse(&[
        "--input",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);

    let err = run_prepare(&cli.prepare).unwrap_err();
    assert!(format!("{err:#}").contains("nothing to write"), "{err:#}");
    assert!(!output.exists());
}

#[test]
fn test_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.csv");
    let cli = parse(&["--input", missing.to_str().unwrap()]);

    let err = run_prepare(&cli.prepare).unwrap_err();
    assert!(format!("{err:#}").contains("input not found"), "{err:#}");
}

#[test]
fn test_standards_override() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), INPUT);
    let standards = dir.path().join("standards.toml");
    fs::write(
        &standards,
        r#"
[standards]
schema = "livestock-standards"
schema_version = 1
version = "test"

[taxonomy]
aggregate = ["Cattle"]

[[regions]]
id = "west"
label = "West (group total)"
members = ["France", "Germany"]
"#,
    )
    .unwrap();
    let cli = parse(&[
        "--input",
        input.to_str().unwrap(),
        "--standards",
        standards.to_str().unwrap(),
        "--dry-run",
    ]);

    let run = run_prepare(&cli.prepare).unwrap();
    assert_eq!(run.report.standards_version, "test");
    assert_eq!(run.report.filter.excluded_items, 0);
    let labels: Vec<&str> = run
        .report
        .regions
        .iter()
        .map(|region| region.label.as_str())
        .collect();
    assert_eq!(labels, vec!["West (group total)"]);
}
