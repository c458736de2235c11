//! Livestock statistics preprocessing core.
//!
//! Turns raw wide-format livestock records into the long-format metric
//! table used for reporting:
//!
//! - **taxonomy**: item exclusion and `all_animals` / `aggregate` / `atomic` tiers
//! - **element**: free-text element labels to `Stocks`, `CH4`, `N2O`
//! - **classify**: row selection combining the two above
//! - **reshape**: wide year columns to one row per year
//! - **metrics**: Stocks, CH4/N2O/Total CO2e and LSU
//! - **cattle**: dairy / other split of cattle stocks for LSU
//! - **regions**: group totals over overlapping country sets
//! - **pipeline**: the [`prepare`] orchestration
//! - **output**: output frame and CSV writing
//!
//! # Example
//!
//! ```ignore
//! use livestock_model::PrepareOptions;
//! use livestock_standards::load_default_standards;
//! use livestock_transform::prepare;
//!
//! let standards = load_default_standards()?;
//! let output = prepare(&raw_table, &standards, &PrepareOptions::default())?;
//! ```

pub mod cattle;
pub mod classify;
pub mod element;
pub mod error;
pub mod metrics;
pub mod output;
pub mod pipeline;
pub mod regions;
pub mod reshape;
pub mod taxonomy;

pub use cattle::{CattleSplit, DAIRY_LABEL, OTHER_LABEL, looks_like_cattle};
pub use classify::{ClassifiedRow, RowFilterStats, classify_records};
pub use element::{is_livestock_total, normalize_element};
pub use error::{Result, TransformError};
pub use metrics::{MetricCalculator, lsu_weight};
pub use output::{OUTPUT_COLUMNS, build_output_frame, write_output_csv};
pub use pipeline::{PrepareOutput, PrepareReport, prepare, prepare_frame};
pub use regions::{EmittedRegion, RegionAggregation, RegionAggregator};
pub use reshape::unpivot_years;
pub use taxonomy::Taxonomy;
