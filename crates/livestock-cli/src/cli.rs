//! CLI argument definitions for the livestock preprocessor.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ArgAction, Args, ColorChoice, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use livestock_model::options::DEFAULT_DAIRY_SHARE_PERCENT;
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

/// File name used when `--output` is not given, next to the input.
pub const DEFAULT_OUTPUT_NAME: &str = "livestock_PREPARED_long.csv";

#[derive(Parser)]
#[command(
    name = "livestock-prep",
    version,
    about = "Prepare livestock statistics as long-format Stocks, CO2e and LSU metrics",
    long_about = "Prepare wide-format livestock statistics (one column per year) as a \
                  long-format table.\n\n\
                  Computes Stocks, CH4/N2O/Total CO2e and livestock units per country, \
                  item and year, and appends EU, EU/EEA+UK and Europe group totals."
)]
pub struct Cli {
    #[command(flatten)]
    pub prepare: PrepareArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging configuration. An explicit `--log-level` beats `-v`/`-q`,
    /// and either one disables `RUST_LOG`.
    pub fn log_config(&self) -> LogConfig {
        let level_filter = self
            .log_level
            .map_or_else(|| self.verbosity.tracing_level_filter(), LevelFilter::from);
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig::default()
            .with_level_filter(level_filter)
            .with_env_filter(!(self.verbosity.is_present() || self.log_level.is_some()))
            .with_format(self.log_format.into())
            .with_ansi(with_ansi)
            .with_log_file(self.log_file.clone())
    }
}

#[derive(Args, Debug, Clone)]
pub struct PrepareArgs {
    /// Raw wide-format CSV (columns Area, Item, Element and year columns like Y2020).
    #[arg(long = "input", value_name = "PATH")]
    pub input: PathBuf,

    /// Output CSV (default: <input dir>/livestock_PREPARED_long.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// GWP factor set: AR4, AR5, AR6_NOCCF or AR6_CCF. Unknown names fall back to AR6_NOCCF.
    #[arg(long = "gwp", value_name = "NAME", default_value = "AR6_NOCCF")]
    pub gwp: String,

    /// Split cattle stocks into dairy and other before computing LSU (1/true/yes/y).
    #[arg(
        long = "split-cattle",
        value_name = "BOOL",
        default_value = "1",
        action = ArgAction::Set,
        value_parser = parse_flag
    )]
    pub split_cattle: bool,

    /// Dairy share of cattle stocks, in percent.
    #[arg(
        long = "dairy-share",
        value_name = "PERCENT",
        default_value_t = DEFAULT_DAIRY_SHARE_PERCENT,
        allow_hyphen_values = true
    )]
    pub dairy_share: f64,

    /// Keep only livestock-total gas series (1/true/yes/y).
    #[arg(
        long = "only-livestock-total",
        value_name = "BOOL",
        default_value = "1",
        action = ArgAction::Set,
        value_parser = parse_flag
    )]
    pub only_livestock_total: bool,

    /// Reference data TOML overriding the embedded taxonomy and regions.
    #[arg(long = "standards", value_name = "PATH")]
    pub standards: Option<PathBuf>,

    /// Run and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl PrepareArgs {
    /// The output path, defaulting to a file next to the input.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => self
                .input
                .parent()
                .map(|dir| dir.join(DEFAULT_OUTPUT_NAME))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_NAME)),
        }
    }
}

/// Parse a boolean option: `1`, `true`, `yes` and `y` (any case) are true,
/// everything else is false.
pub fn parse_flag(value: &str) -> Result<bool, String> {
    Ok(matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y"
    ))
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
