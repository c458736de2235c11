#![deny(unsafe_code)]

//! Serde shape of the reference-data TOML file.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardsFile {
    pub standards: StandardsHeader,
    pub taxonomy: TaxonomySection,
    #[serde(default)]
    pub regions: Vec<RegionSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardsHeader {
    pub schema: String,
    pub schema_version: u32,
    pub version: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxonomySection {
    #[serde(default)]
    pub all_animals: Vec<String>,
    #[serde(default)]
    pub aggregate: Vec<String>,
    #[serde(default)]
    pub atomic: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionSection {
    pub id: String,
    pub label: String,
    /// Ids of earlier regions whose members are folded into this one.
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub members: Vec<String>,
}
