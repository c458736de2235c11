//! Element label normalization.
//!
//! Raw element labels are free text ("Emissions (CH4) (Enteric)",
//! "Stocks", "Methane, manure management"...). Each label is mapped onto one
//! of the three codes the metric stages understand, or dropped.

use std::sync::LazyLock;

use livestock_common::normalize_key;
use livestock_model::ElementCode;
use regex::Regex;

/// Ordered rules; the first match wins.
static ELEMENT_RULES: LazyLock<Vec<(Regex, ElementCode)>> = LazyLock::new(|| {
    [
        (r"^stocks?$|\bstock\b", ElementCode::Stocks),
        (r"\b(ch4|methane)\b", ElementCode::Ch4),
        (r"\b(n2o|nitrous)\b", ElementCode::N2o),
    ]
    .into_iter()
    .map(|(pattern, code)| (Regex::new(pattern).expect("Invalid element regex"), code))
    .collect()
});

/// Map a raw element label to its code.
///
/// Matching runs on the trimmed, lowercased label. Returns `None` for
/// labels that match no rule; such rows are dropped.
pub fn normalize_element(label: &str) -> Option<ElementCode> {
    let key = normalize_key(label);
    ELEMENT_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(&key))
        .map(|(_, code)| *code)
}

/// Returns true if the element label names a livestock-total gas series
/// (both "livestock" and "total" appear, in any case).
pub fn is_livestock_total(label: &str) -> bool {
    let key = label.to_lowercase();
    key.contains("livestock") && key.contains("total")
}
