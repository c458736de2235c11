//! Cell conversion for Polars frames.
//!
//! Raw livestock files arrive with whatever dtypes the CSV reader inferred:
//! year columns may be integers, floats or strings (when a column is mostly
//! empty or carries flags). These helpers flatten that variety into the
//! `String` / `f64` values the pipeline works with.

use polars::prelude::AnyValue;

/// Text form of a cell. Null becomes the empty string.
///
/// ```
/// use polars::prelude::AnyValue;
/// use livestock_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int64(2020)), "2020");
/// assert_eq!(any_to_string(AnyValue::String("France")), "France");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_owned(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        other => other.to_string(),
    }
}

/// Shortest decimal form of `v`; whole numbers print without a fraction.
///
/// ```
/// use livestock_common::format_numeric;
///
/// assert_eq!(format_numeric(27.2), "27.2");
/// assert_eq!(format_numeric(273.0), "273");
/// assert_eq!(format_numeric(-0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    if v == 0.0 {
        "0".to_owned()
    } else {
        v.to_string()
    }
}

/// Numeric value of a cell.
///
/// Text cells are parsed after trimming. Null, booleans, unparseable text
/// and NaN are all missing.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    let parsed = match &value {
        AnyValue::Null | AnyValue::Boolean(_) => None,
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(s),
        numeric => numeric.extract::<f64>(),
    };
    parsed.filter(|v| !v.is_nan())
}

/// Parses trimmed text as `f64`; blank text is missing.
pub fn parse_f64(value: &str) -> Option<f64> {
    match value.trim() {
        "" => None,
        trimmed => trimmed.parse().ok(),
    }
}

/// Lookup key for a free-text label: trimmed and lower-cased.
///
/// Used for every case-insensitive label test: taxonomy and exclusion
/// lists, element labels and the overlap check on the standards file.
/// Column headers are matched exactly.
pub fn normalize_key(value: &str) -> String {
    value.trim().to_lowercase()
}
