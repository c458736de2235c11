use std::path::PathBuf;

use livestock_model::PrepareOptions;
use livestock_transform::PrepareReport;

/// Outcome of one `livestock-prep` run.
#[derive(Debug)]
pub struct PrepareRun {
    pub input: PathBuf,
    pub output: PathBuf,
    /// False for dry runs.
    pub written: bool,
    pub options: PrepareOptions,
    /// The `--gwp` value when it was not recognized.
    pub gwp_fallback_from: Option<String>,
    pub standards_source: String,
    pub report: PrepareReport,
}
