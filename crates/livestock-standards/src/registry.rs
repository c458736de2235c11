#![deny(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

use livestock_common::normalize_key;
use tracing::debug;

use crate::error::StandardsError;
use crate::hash::standards_fingerprint;
use crate::manifest::{RegionSection, StandardsFile, TaxonomySection};

const SCHEMA: &str = "livestock-standards";
const SCHEMA_VERSION: u32 = 1;

const EMBEDDED_STANDARDS: &str = include_str!("../standards/livestock.toml");

/// Where a [`Standards`] value was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StandardsSource {
    Embedded,
    File(PathBuf),
}

impl fmt::Display for StandardsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StandardsSource::Embedded => write!(f, "embedded"),
            StandardsSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Item label lists, as written in the reference file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxonomyLists {
    pub all_animals: Vec<String>,
    pub aggregate: Vec<String>,
    pub atomic: Vec<String>,
    pub exclude: Vec<String>,
}

/// A named country grouping with its resolved membership.
///
/// Groups may overlap; each is summed independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub id: String,
    /// Synthetic area label used for the group total rows.
    pub label: String,
    /// Country names, matched exactly against the `Area` column.
    pub members: BTreeSet<String>,
}

impl Region {
    pub fn contains(&self, area: &str) -> bool {
        self.members.contains(area)
    }
}

/// Validated reference data.
#[derive(Debug, Clone)]
pub struct Standards {
    pub version: String,
    /// SHA-256 of the TOML text, for tracing outputs back to their inputs.
    pub fingerprint: String,
    pub source: StandardsSource,
    pub taxonomy: TaxonomyLists,
    /// Regions in file order.
    pub regions: Vec<Region>,
}

impl Standards {
    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.id == id)
    }

    /// Labels of all region group totals, in file order.
    pub fn region_labels(&self) -> Vec<&str> {
        self.regions.iter().map(|region| region.label.as_str()).collect()
    }

    /// Returns true if `area` is one of the synthetic region labels.
    pub fn is_region_label(&self, area: &str) -> bool {
        self.regions.iter().any(|region| region.label == area)
    }
}

/// Load the reference data compiled into the binary.
pub fn load_default_standards() -> Result<Standards, StandardsError> {
    parse_standards(EMBEDDED_STANDARDS, StandardsSource::Embedded)
}

/// Load reference data from a TOML file on disk.
pub fn load_standards_from_path(path: &Path) -> Result<Standards, StandardsError> {
    let contents = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    parse_standards(&contents, StandardsSource::File(path.to_path_buf()))
}

/// Parse and validate reference data from TOML text.
pub fn parse_standards(contents: &str, source: StandardsSource) -> Result<Standards, StandardsError> {
    let file: StandardsFile = toml::from_str(contents).map_err(|e| StandardsError::Toml {
        origin: source.to_string(),
        source: e,
    })?;

    validate_header(&file)?;
    validate_taxonomy(&file.taxonomy)?;
    let regions = resolve_regions(&file.regions)?;

    let standards = Standards {
        version: file.standards.version,
        fingerprint: standards_fingerprint(contents),
        source,
        taxonomy: TaxonomyLists {
            all_animals: file.taxonomy.all_animals,
            aggregate: file.taxonomy.aggregate,
            atomic: file.taxonomy.atomic,
            exclude: file.taxonomy.exclude,
        },
        regions,
    };
    debug!(
        version = %standards.version,
        source = %standards.source,
        fingerprint = %standards.fingerprint,
        region_count = standards.regions.len(),
        "standards loaded"
    );
    Ok(standards)
}

fn validate_header(file: &StandardsFile) -> Result<(), StandardsError> {
    if file.standards.schema != SCHEMA {
        return Err(StandardsError::invalid(format!(
            "unsupported schema: {}",
            file.standards.schema
        )));
    }
    if file.standards.schema_version != SCHEMA_VERSION {
        return Err(StandardsError::invalid(format!(
            "unsupported schema_version: {}",
            file.standards.schema_version
        )));
    }
    if file.standards.version.trim().is_empty() {
        return Err(StandardsError::invalid("empty version"));
    }
    Ok(())
}

fn validate_taxonomy(taxonomy: &TaxonomySection) -> Result<(), StandardsError> {
    let excluded: BTreeSet<String> = taxonomy
        .exclude
        .iter()
        .map(String::as_str)
        .map(normalize_key)
        .collect();
    let lists: [(&'static str, &Vec<String>); 3] = [
        ("all_animals", &taxonomy.all_animals),
        ("aggregate", &taxonomy.aggregate),
        ("atomic", &taxonomy.atomic),
    ];
    for (list, labels) in lists {
        if let Some(label) = labels.iter().find(|label| excluded.contains(&normalize_key(label))) {
            return Err(StandardsError::ConflictingLabel {
                label: label.clone(),
                list,
            });
        }
    }
    Ok(())
}

fn resolve_regions(sections: &[RegionSection]) -> Result<Vec<Region>, StandardsError> {
    let mut resolved: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();
    let mut labels: BTreeSet<&str> = BTreeSet::new();
    let mut regions = Vec::with_capacity(sections.len());

    for section in sections {
        let id = section.id.trim();
        let label = section.label.trim();
        if id.is_empty() || label.is_empty() {
            return Err(StandardsError::invalid("region with empty id or label"));
        }
        if resolved.contains_key(id) {
            return Err(StandardsError::DuplicateRegion {
                field: "id",
                value: id.to_string(),
            });
        }
        if !labels.insert(label) {
            return Err(StandardsError::DuplicateRegion {
                field: "label",
                value: label.to_string(),
            });
        }

        let mut members: BTreeSet<String> = BTreeSet::new();
        for include in &section.includes {
            let parent = resolved.get(include.trim()).ok_or_else(|| {
                StandardsError::UnknownInclude {
                    region: id.to_string(),
                    include: include.clone(),
                }
            })?;
            members.extend(parent.iter().cloned());
        }
        members.extend(
            section
                .members
                .iter()
                .map(|member| member.trim().to_string())
                .filter(|member| !member.is_empty()),
        );
        if members.is_empty() {
            return Err(StandardsError::EmptyRegion {
                region: id.to_string(),
            });
        }

        resolved.insert(id, members.clone());
        regions.push(Region {
            id: id.to_string(),
            label: label.to_string(),
            members,
        });
    }
    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_regions(regions: &str) -> String {
        format!(
            r#"
[standards]
schema = "livestock-standards"
schema_version = 1
version = "test"

[taxonomy]
aggregate = ["Cattle"]
exclude = ["Chickens"]

{regions}
"#
        )
    }

    #[test]
    fn embedded_standards_load() {
        let standards = load_default_standards().expect("embedded standards");
        assert_eq!(standards.version, "v3e");
        assert_eq!(standards.source, StandardsSource::Embedded);
        assert_eq!(
            standards.region_labels(),
            vec![
                "EU (group total)",
                "EU/EEA+UK (group total)",
                "Europe (group total)"
            ]
        );
        assert_eq!(standards.fingerprint.len(), 64);
    }

    #[test]
    fn embedded_eea_extends_eu() {
        let standards = load_default_standards().expect("embedded standards");
        let eu = standards.region("eu").expect("eu region");
        let eea = standards.region("eea_uk").expect("eea region");
        assert_eq!(eu.members.len(), 28);
        assert!(eu.members.is_subset(&eea.members));
        for extra in ["Iceland", "Liechtenstein", "Norway", "United Kingdom", "UK"] {
            assert!(eea.contains(extra));
            assert!(!eu.contains(extra));
        }
        assert_eq!(eea.members.len(), 33);
    }

    #[test]
    fn rejects_unknown_schema() {
        let text = with_regions("").replace("livestock-standards", "other");
        let err = parse_standards(&text, StandardsSource::Embedded).unwrap_err();
        assert!(matches!(err, StandardsError::InvalidStandards { .. }));
    }

    #[test]
    fn rejects_forward_include() {
        let text = with_regions(
            r#"
[[regions]]
id = "a"
label = "A (group total)"
includes = ["b"]

[[regions]]
id = "b"
label = "B (group total)"
members = ["France"]
"#,
        );
        let err = parse_standards(&text, StandardsSource::Embedded).unwrap_err();
        assert!(matches!(err, StandardsError::UnknownInclude { .. }));
    }

    #[test]
    fn rejects_empty_and_duplicate_regions() {
        let empty = with_regions(
            r#"
[[regions]]
id = "a"
label = "A (group total)"
members = []
"#,
        );
        assert!(matches!(
            parse_standards(&empty, StandardsSource::Embedded),
            Err(StandardsError::EmptyRegion { .. })
        ));

        let duplicate = with_regions(
            r#"
[[regions]]
id = "a"
label = "Same"
members = ["France"]

[[regions]]
id = "b"
label = "Same"
members = ["Spain"]
"#,
        );
        assert!(matches!(
            parse_standards(&duplicate, StandardsSource::Embedded),
            Err(StandardsError::DuplicateRegion { field: "label", .. })
        ));
    }

    #[test]
    fn rejects_excluded_label_in_taxonomy() {
        let text = with_regions("").replace(
            "aggregate = [\"Cattle\"]",
            "aggregate = [\"Cattle\", \"chickens\"]",
        );
        let err = parse_standards(&text, StandardsSource::Embedded).unwrap_err();
        assert!(matches!(
            err,
            StandardsError::ConflictingLabel {
                list: "aggregate",
                ..
            }
        ));
    }
}
