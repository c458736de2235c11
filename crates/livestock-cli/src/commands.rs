use std::time::Instant;

use anyhow::{Context, Result};
use livestock_ingest::read_csv_frame;
use livestock_model::{GwpSet, PrepareOptions};
use livestock_standards::{Standards, load_default_standards, load_standards_from_path};
use livestock_transform::{prepare_frame, write_output_csv};
use tracing::{info, info_span, warn};

use crate::cli::PrepareArgs;
use crate::types::PrepareRun;

/// Build preparation options from the command line.
///
/// Returns the options and, when `--gwp` was not recognized, the rejected
/// name.
pub fn options_from_args(args: &PrepareArgs) -> (PrepareOptions, Option<String>) {
    let (gwp, fallback_used) = GwpSet::from_name_or_default(&args.gwp);
    if fallback_used {
        warn!(requested = %args.gwp, fallback = %gwp, "unknown GWP set, using default");
    }
    let options = PrepareOptions::new()
        .with_gwp(gwp)
        .with_split_cattle(args.split_cattle)
        .with_dairy_share_percent(args.dairy_share)
        .with_only_livestock_total(args.only_livestock_total);
    (options, fallback_used.then(|| args.gwp.clone()))
}

fn load_standards(args: &PrepareArgs) -> Result<Standards> {
    match &args.standards {
        Some(path) => load_standards_from_path(path)
            .with_context(|| format!("load standards {}", path.display())),
        None => load_default_standards().context("load embedded standards"),
    }
}

/// Read, prepare and write. The output file is only created once
/// preparation has succeeded.
pub fn run_prepare(args: &PrepareArgs) -> Result<PrepareRun> {
    let run_span = info_span!("run", input = %args.input.display());
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    let (options, gwp_fallback_from) = options_from_args(args);
    let standards = load_standards(args)?;
    let output = args.output_path();

    let df = read_csv_frame(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let (mut frame, report) =
        prepare_frame(&df, &standards, &options).context("prepare livestock data")?;

    let written = if args.dry_run {
        info!(output = %output.display(), "dry run, output not written");
        false
    } else {
        write_output_csv(&mut frame, &output)
            .with_context(|| format!("write {}", output.display()))?;
        true
    };

    info!(
        output_rows = report.output_rows,
        written,
        duration_ms = run_start.elapsed().as_millis(),
        "run complete"
    );

    Ok(PrepareRun {
        input: args.input.clone(),
        output,
        written,
        options,
        gwp_fallback_from,
        standards_source: standards.source.to_string(),
        report,
    })
}
