//! Closed vocabularies used by the livestock pipeline.
//!
//! The string forms returned by `as_str` are the exact values written to
//! the prepared output file and read back by the reporting dashboard, so
//! they are part of the output contract.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Canonical measured element after label normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ElementCode {
    /// Head counts.
    Stocks,
    /// Methane emissions (mass of CH4).
    Ch4,
    /// Nitrous oxide emissions (mass of N2O).
    N2o,
}

impl ElementCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementCode::Stocks => "Stocks",
            ElementCode::Ch4 => "CH4",
            ElementCode::N2o => "N2O",
        }
    }

    /// Returns true for the greenhouse gas elements (CH4 and N2O).
    pub fn is_gas(&self) -> bool {
        matches!(self, ElementCode::Ch4 | ElementCode::N2o)
    }
}

impl fmt::Display for ElementCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ElementCode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "STOCKS" => Ok(ElementCode::Stocks),
            "CH4" => Ok(ElementCode::Ch4),
            "N2O" => Ok(ElementCode::N2o),
            _ => Err(ModelError::UnknownElement {
                name: s.to_string(),
            }),
        }
    }
}

/// Classification tier of an item label.
///
/// - **AllAnimals**: the whole herd ("All animals", "Total animals", ...)
/// - **Aggregate**: a species group ("Cattle", "Sheep and Goats", ...)
/// - **Atomic**: a specific category; also the default for unknown labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    AllAnimals,
    Aggregate,
    Atomic,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::AllAnimals => "all_animals",
            ItemKind::Aggregate => "aggregate",
            ItemKind::Atomic => "atomic",
        }
    }

    pub fn is_all_animals(&self) -> bool {
        matches!(self, ItemKind::AllAnimals)
    }

    pub fn is_atomic(&self) -> bool {
        matches!(self, ItemKind::Atomic)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all_animals" => Ok(ItemKind::AllAnimals),
            "aggregate" => Ok(ItemKind::Aggregate),
            "atomic" => Ok(ItemKind::Atomic),
            _ => Err(ModelError::UnknownItemKind {
                name: s.to_string(),
            }),
        }
    }
}

/// Output metric.
///
/// Variants are declared in the lexical order of their names so that the
/// derived `Ord` matches the output sort on the `Metric` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "CH4_CO2e")]
    Ch4Co2e,
    #[serde(rename = "LSU")]
    Lsu,
    #[serde(rename = "N2O_CO2e")]
    N2oCo2e,
    Stocks,
    #[serde(rename = "Total_CO2e")]
    TotalCo2e,
}

impl Metric {
    /// All metrics in output order.
    pub const ALL: [Metric; 5] = [
        Metric::Ch4Co2e,
        Metric::Lsu,
        Metric::N2oCo2e,
        Metric::Stocks,
        Metric::TotalCo2e,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Ch4Co2e => "CH4_CO2e",
            Metric::Lsu => "LSU",
            Metric::N2oCo2e => "N2O_CO2e",
            Metric::Stocks => "Stocks",
            Metric::TotalCo2e => "Total_CO2e",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Metric {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Metric::ALL
            .into_iter()
            .find(|metric| metric.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownMetric {
                name: s.to_string(),
            })
    }
}
