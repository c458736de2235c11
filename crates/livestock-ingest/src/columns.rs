//! Input column layout: required key columns and year columns.

use livestock_model::YearColumn;

use crate::error::{IngestError, Result};

/// Columns every input file must carry.
pub const REQUIRED_COLUMNS: [&str; 3] = ["Area", "Item", "Element"];

/// Resolved header names for one input frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub area: String,
    pub item: String,
    pub element: String,
    /// Year columns in file order.
    pub year_columns: Vec<YearColumn>,
}

fn clean_header(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}').trim()
}

/// Parse a year-column header: one ASCII letter followed by exactly four
/// ASCII digits (`Y2020` -> 2020).
pub fn parse_year_header(header: &str) -> Option<i32> {
    let cleaned = clean_header(header);
    let mut chars = cleaned.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    let digits = chars.as_str();
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Detect year columns among the headers, keeping file order.
pub fn detect_year_columns<S: AsRef<str>>(headers: &[S]) -> Vec<YearColumn> {
    headers
        .iter()
        .filter_map(|header| {
            let name = header.as_ref();
            parse_year_header(name).map(|year| YearColumn::new(name, year))
        })
        .collect()
}

/// Resolve the required columns and the year columns.
///
/// # Errors
///
/// - [`IngestError::MissingColumns`] naming every absent required column
/// - [`IngestError::NoYearColumns`] when no header looks like a year
pub fn resolve_layout<S: AsRef<str>>(headers: &[S]) -> Result<ColumnLayout> {
    let find = |wanted: &str| {
        headers
            .iter()
            .map(|header| header.as_ref())
            .find(|header| clean_header(header) == wanted)
            .map(str::to_string)
    };

    let mut missing: Vec<String> = Vec::new();
    let mut found: Vec<String> = Vec::with_capacity(REQUIRED_COLUMNS.len());
    for wanted in REQUIRED_COLUMNS {
        match find(wanted) {
            Some(name) => found.push(name),
            None => missing.push(wanted.to_string()),
        }
    }
    if !missing.is_empty() {
        missing.sort();
        return Err(IngestError::MissingColumns { columns: missing });
    }

    let year_columns = detect_year_columns(headers);
    if year_columns.is_empty() {
        return Err(IngestError::NoYearColumns);
    }

    let mut found = found.into_iter();
    let (Some(area), Some(item), Some(element)) = (found.next(), found.next(), found.next())
    else {
        return Err(IngestError::MissingColumns {
            columns: REQUIRED_COLUMNS.into_iter().map(String::from).collect(),
        });
    };
    Ok(ColumnLayout {
        area,
        item,
        element,
        year_columns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year_header() {
        assert_eq!(parse_year_header("Y2020"), Some(2020));
        assert_eq!(parse_year_header("y1961"), Some(1961));
        assert_eq!(parse_year_header(" Y2018 "), Some(2018));
        assert_eq!(parse_year_header("Y20"), None);
        assert_eq!(parse_year_header("Y20201"), None);
        assert_eq!(parse_year_header("2020"), None);
        assert_eq!(parse_year_header("Y2020F"), None);
        assert_eq!(parse_year_header("Area"), None);
        assert_eq!(parse_year_header(""), None);
    }

    #[test]
    fn test_detect_year_columns_keeps_order() {
        let headers = ["Area", "Y2021", "Item", "Y2019", "Element", "Y2019F"];
        let years = detect_year_columns(&headers);
        assert_eq!(
            years,
            vec![YearColumn::new("Y2021", 2021), YearColumn::new("Y2019", 2019)]
        );
    }

    #[test]
    fn test_resolve_layout() {
        let headers = ["\u{feff}Area", "Item", "Element", "Y2020"];
        let layout = resolve_layout(&headers).expect("layout");
        assert_eq!(layout.area, "\u{feff}Area");
        assert_eq!(layout.item, "Item");
        assert_eq!(layout.year_columns.len(), 1);
    }

    #[test]
    fn test_missing_columns_are_sorted_and_named() {
        let headers = ["Item", "Y2020"];
        let err = resolve_layout(&headers).unwrap_err();
        match err {
            IngestError::MissingColumns { columns } => {
                assert_eq!(columns, vec!["Area".to_string(), "Element".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_year_columns() {
        let headers = ["Area", "Item", "Element", "Unit"];
        assert!(matches!(
            resolve_layout(&headers),
            Err(IngestError::NoYearColumns)
        ));
    }

    #[test]
    fn test_required_columns_are_checked_before_years() {
        let headers = ["Area", "Item"];
        assert!(matches!(
            resolve_layout(&headers),
            Err(IngestError::MissingColumns { .. })
        ));
    }
}
