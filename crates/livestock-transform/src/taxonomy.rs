//! Item taxonomy: exclusion and tier classification.

use std::collections::HashSet;

use livestock_common::normalize_key;
use livestock_model::ItemKind;
use livestock_standards::{Standards, TaxonomyLists};

/// Case-insensitive lookup over the item lists of the reference data.
///
/// Labels are compared after trimming and lowercasing. An item on no list
/// is treated as atomic.
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    all_animals: HashSet<String>,
    aggregate: HashSet<String>,
    atomic: HashSet<String>,
    excluded: HashSet<String>,
}

impl Taxonomy {
    pub fn from_lists(lists: &TaxonomyLists) -> Self {
        fn keys(labels: &[String]) -> HashSet<String> {
            labels.iter().map(String::as_str).map(normalize_key).collect()
        }
        Self {
            all_animals: keys(&lists.all_animals),
            aggregate: keys(&lists.aggregate),
            atomic: keys(&lists.atomic),
            excluded: keys(&lists.exclude),
        }
    }

    pub fn from_standards(standards: &Standards) -> Self {
        Self::from_lists(&standards.taxonomy)
    }

    /// Returns true if rows for this item are dropped before any processing.
    pub fn is_excluded(&self, item: &str) -> bool {
        self.excluded.contains(&normalize_key(item))
    }

    /// Classify an item. `all_animals` wins over `aggregate`; anything else
    /// is atomic.
    pub fn classify(&self, item: &str) -> ItemKind {
        let key = normalize_key(item);
        if self.all_animals.contains(&key) {
            ItemKind::AllAnimals
        } else if self.aggregate.contains(&key) {
            ItemKind::Aggregate
        } else {
            ItemKind::Atomic
        }
    }

    /// Returns true if the item appears on any list, including the
    /// exclusion list.
    pub fn is_listed(&self, item: &str) -> bool {
        let key = normalize_key(item);
        self.all_animals.contains(&key)
            || self.aggregate.contains(&key)
            || self.atomic.contains(&key)
            || self.excluded.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists() -> TaxonomyLists {
        TaxonomyLists {
            all_animals: vec!["All Animals".into()],
            aggregate: vec!["Cattle".into(), "Poultry Birds".into()],
            atomic: vec!["Cattle, dairy".into()],
            exclude: vec!["Chickens".into()],
        }
    }

    #[test]
    fn test_classify_tiers() {
        let taxonomy = Taxonomy::from_lists(&lists());
        assert_eq!(taxonomy.classify("All Animals"), ItemKind::AllAnimals);
        assert_eq!(taxonomy.classify("Cattle"), ItemKind::Aggregate);
        assert_eq!(taxonomy.classify("Cattle, dairy"), ItemKind::Atomic);
        assert_eq!(taxonomy.classify("Llamas"), ItemKind::Atomic);
    }

    #[test]
    fn test_lookup_ignores_case_and_padding() {
        let taxonomy = Taxonomy::from_lists(&lists());
        assert_eq!(taxonomy.classify("  all animals "), ItemKind::AllAnimals);
        assert_eq!(taxonomy.classify("POULTRY BIRDS"), ItemKind::Aggregate);
        assert!(taxonomy.is_excluded(" chickens"));
        assert!(!taxonomy.is_excluded("Chickens, layers"));
    }

    #[test]
    fn test_is_listed() {
        let taxonomy = Taxonomy::from_lists(&lists());
        assert!(taxonomy.is_listed("cattle, dairy"));
        assert!(taxonomy.is_listed("Chickens"));
        assert!(!taxonomy.is_listed("Llamas"));
    }

    #[test]
    fn test_embedded_taxonomy() {
        let standards = livestock_standards::load_default_standards().expect("embedded standards");
        let taxonomy = Taxonomy::from_standards(&standards);
        assert_eq!(taxonomy.classify("All Animals"), ItemKind::AllAnimals);
        assert_eq!(taxonomy.classify("Cattle"), ItemKind::Aggregate);
        assert_eq!(taxonomy.classify("Swine, breeding"), ItemKind::Atomic);
        assert!(taxonomy.is_excluded("Mules and hinnies"));
    }
}
