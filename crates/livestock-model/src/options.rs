//! Configuration options for livestock preprocessing.

use serde::{Deserialize, Serialize};

use crate::gwp::GwpSet;

/// Default dairy share of cattle stocks, in percent.
pub const DEFAULT_DAIRY_SHARE_PERCENT: f64 = 35.0;

/// Options controlling the preparation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepareOptions {
    /// GWP factor set used for the CO2-equivalent metrics.
    pub gwp: GwpSet,

    /// Split cattle stocks into dairy / other rows before the LSU weights
    /// are applied. Only the LSU metric is affected.
    pub split_cattle: bool,

    /// Dairy share of cattle stocks in percent. Clamped to [0, 100] when
    /// converted to a fraction.
    pub dairy_share_percent: f64,

    /// Keep only the "Livestock total" CH4/N2O lines, dropping per-process
    /// gas rows that would otherwise be double counted.
    pub only_livestock_total: bool,
}

impl Default for PrepareOptions {
    fn default() -> Self {
        Self {
            gwp: GwpSet::default(),
            split_cattle: true,
            dairy_share_percent: DEFAULT_DAIRY_SHARE_PERCENT,
            only_livestock_total: true,
        }
    }
}

impl PrepareOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_gwp(mut self, gwp: GwpSet) -> Self {
        self.gwp = gwp;
        self
    }

    #[must_use]
    pub fn with_split_cattle(mut self, enable: bool) -> Self {
        self.split_cattle = enable;
        self
    }

    #[must_use]
    pub fn with_dairy_share_percent(mut self, percent: f64) -> Self {
        self.dairy_share_percent = percent;
        self
    }

    #[must_use]
    pub fn with_only_livestock_total(mut self, enable: bool) -> Self {
        self.only_livestock_total = enable;
        self
    }

    /// Dairy share as a fraction in [0, 1]. A NaN share counts as zero.
    pub fn dairy_fraction(&self) -> f64 {
        let share = if self.dairy_share_percent.is_nan() {
            0.0
        } else {
            self.dairy_share_percent
        };
        (share / 100.0).clamp(0.0, 1.0)
    }
}
