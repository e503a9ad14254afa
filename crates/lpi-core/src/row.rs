//! Row model shared by the ranking, averaging and threshold passes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding the country name.
pub const COUNTRY: &str = "country";
/// Field holding the region name.
pub const REGION: &str = "region";
/// Field holding the logistics-performance score.
pub const LPI_SCORE: &str = "lpi_score";

/// A row as fetched from the record store, unvalidated.
pub type RawRow = Map<String, Value>;

/// A cleaned, ranked row ready for output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Country name as it appeared in the winning row (trimmed).
    pub country: String,
    /// Region passed through from the winning row.
    pub region: Value,
    /// Parsed numeric score.
    pub lpi_score: f64,
}

/// Stringify a field value. `None` for JSON null.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Get a non-null field from a row as text.
pub fn field_text(row: &RawRow, field: &str) -> Option<String> {
    row.get(field).and_then(value_text)
}

/// Deduplication identity for a country: whitespace removed, uppercased.
///
/// "Viet Nam", "Vietnam" and "VIETNAM" all map to "VIETNAM".
pub fn canonical_key(country: &str) -> String {
    country
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Build a raw row from country, region and score values.
///
/// Mostly useful for tests and fixtures.
pub fn raw_row(
    country: impl Into<Value>,
    region: impl Into<Value>,
    lpi_score: impl Into<Value>,
) -> RawRow {
    let mut row = RawRow::new();
    row.insert(COUNTRY.to_string(), country.into());
    row.insert(REGION.to_string(), region.into());
    row.insert(LPI_SCORE.to_string(), lpi_score.into());
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_key_variants() {
        assert_eq!(canonical_key("Viet Nam"), "VIETNAM");
        assert_eq!(canonical_key("Vietnam"), "VIETNAM");
        assert_eq!(canonical_key("VIETNAM"), "VIETNAM");
        assert_eq!(canonical_key(" viet\tnam\n"), "VIETNAM");
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&json!(null)), None);
        assert_eq!(value_text(&json!("4.3")), Some("4.3".to_string()));
        assert_eq!(value_text(&json!(4.3)), Some("4.3".to_string()));
        assert_eq!(value_text(&json!(4)), Some("4".to_string()));
        assert_eq!(value_text(&json!(true)), Some("true".to_string()));
    }

    #[test]
    fn test_field_text_missing_and_null() {
        let mut row = raw_row("Chile", json!(null), "3.1");
        assert_eq!(field_text(&row, REGION), None);
        row.remove(COUNTRY);
        assert_eq!(field_text(&row, COUNTRY), None);
        assert_eq!(field_text(&row, LPI_SCORE), Some("3.1".to_string()));
    }

    #[test]
    fn test_result_row_field_order() {
        let row = ResultRow {
            country: "Singapore".to_string(),
            region: json!("Asia"),
            lpi_score: 4.3,
        };
        let text = serde_json::to_string(&row).unwrap();
        assert_eq!(text, r#"{"country":"Singapore","region":"Asia","lpi_score":4.3}"#);
    }
}
