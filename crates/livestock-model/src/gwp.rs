//! Global-warming-potential factor sets.
//!
//! Each IPCC assessment report publishes 100-year GWP factors used to
//! express CH4 and N2O masses as CO2-equivalents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Named GWP factor set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GwpSet {
    /// IPCC AR4.
    #[serde(rename = "AR4")]
    Ar4,
    /// IPCC AR5 (without climate-carbon feedback).
    #[serde(rename = "AR5")]
    Ar5,
    /// IPCC AR6, fossil-neutral methane without climate-carbon feedback.
    #[default]
    #[serde(rename = "AR6_NOCCF")]
    Ar6NoCcf,
    /// IPCC AR6 including climate-carbon feedback.
    #[serde(rename = "AR6_CCF")]
    Ar6Ccf,
}

/// CO2-equivalence multipliers for the two gases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GwpFactors {
    pub ch4: f64,
    pub n2o: f64,
}

impl GwpSet {
    pub const ALL: [GwpSet; 4] = [GwpSet::Ar4, GwpSet::Ar5, GwpSet::Ar6NoCcf, GwpSet::Ar6Ccf];

    pub fn as_str(&self) -> &'static str {
        match self {
            GwpSet::Ar4 => "AR4",
            GwpSet::Ar5 => "AR5",
            GwpSet::Ar6NoCcf => "AR6_NOCCF",
            GwpSet::Ar6Ccf => "AR6_CCF",
        }
    }

    pub fn factors(&self) -> GwpFactors {
        match self {
            GwpSet::Ar4 => GwpFactors {
                ch4: 25.0,
                n2o: 298.0,
            },
            GwpSet::Ar5 => GwpFactors {
                ch4: 28.0,
                n2o: 265.0,
            },
            GwpSet::Ar6NoCcf => GwpFactors {
                ch4: 27.2,
                n2o: 273.0,
            },
            GwpSet::Ar6Ccf => GwpFactors {
                ch4: 29.8,
                n2o: 273.0,
            },
        }
    }

    /// Resolve a factor-set name, falling back to the default set
    /// (`AR6_NOCCF`) when the name is not recognized.
    ///
    /// Returns the resolved set and whether the fallback was used, so
    /// callers can report it.
    pub fn from_name_or_default(name: &str) -> (GwpSet, bool) {
        match name.parse::<GwpSet>() {
            Ok(set) => (set, false),
            Err(_) => (GwpSet::default(), true),
        }
    }
}

impl fmt::Display for GwpSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GwpSet {
    type Err = ModelError;

    /// Parse a factor-set name (trimmed, case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AR4" => Ok(GwpSet::Ar4),
            "AR5" => Ok(GwpSet::Ar5),
            "AR6_NOCCF" => Ok(GwpSet::Ar6NoCcf),
            "AR6_CCF" => Ok(GwpSet::Ar6Ccf),
            _ => Err(ModelError::UnknownGwpSet {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_pairs() {
        assert_eq!(GwpSet::Ar4.factors(), GwpFactors { ch4: 25.0, n2o: 298.0 });
        assert_eq!(GwpSet::Ar5.factors(), GwpFactors { ch4: 28.0, n2o: 265.0 });
        assert_eq!(GwpSet::Ar6NoCcf.factors(), GwpFactors { ch4: 27.2, n2o: 273.0 });
        assert_eq!(GwpSet::Ar6Ccf.factors(), GwpFactors { ch4: 29.8, n2o: 273.0 });
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(" ar5 ".parse::<GwpSet>().unwrap(), GwpSet::Ar5);
        assert_eq!("Ar6_Ccf".parse::<GwpSet>().unwrap(), GwpSet::Ar6Ccf);
    }

    #[test]
    fn test_unknown_name_falls_back() {
        assert_eq!(GwpSet::from_name_or_default("AR7"), (GwpSet::Ar6NoCcf, true));
        assert_eq!(GwpSet::from_name_or_default("AR4"), (GwpSet::Ar4, false));
        assert!(matches!(
            "SAR".parse::<GwpSet>(),
            Err(ModelError::UnknownGwpSet { .. })
        ));
    }
}
