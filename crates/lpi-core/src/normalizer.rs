//! Score normalization.
//!
//! Scores arrive either as numerals ("4.3", `4.3`) or as English phrases
//! such as "three point six six". [`parse`] turns the latter into decimal
//! strings and passes everything else through lowercased and trimmed.
//! It never fails; callers decide validity with [`is_numeric_score`] or
//! use [`score_value`] which does both steps.

use serde_json::Value;

use crate::numbers::lookup;
use crate::row::value_text;

const POINT: &str = " point ";

/// Normalize a raw score value into a decimal string.
///
/// JSON null yields an empty string.
pub fn parse(raw: &Value) -> String {
    match value_text(raw) {
        Some(text) => parse_str(&text),
        None => String::new(),
    }
}

/// Normalize a score string. See [`parse`].
pub fn parse_str(raw: &str) -> String {
    let normalized = raw.to_lowercase().trim().to_string();

    if normalized.contains(POINT) {
        let sections: Vec<&str> = normalized.split(POINT).collect();
        if let [integer, decimal] = sections.as_slice() {
            let integer_part = lookup(integer).unwrap_or_default();
            let decimal_part = parse_decimal_part(decimal);

            if !integer_part.is_empty() && !decimal_part.is_empty() {
                return format!("{}.{}", integer_part, decimal_part);
            }
        }
    }

    normalized
}

/// Resolve the words after "point".
///
/// A whole-section match wins ("fifteen" -> "15"); otherwise each word is
/// translated on its own and the digits concatenated ("six six" -> "66").
/// Unknown words are skipped.
fn parse_decimal_part(section: &str) -> String {
    if section.is_empty() {
        return String::new();
    }

    if let Some(digits) = lookup(section) {
        return digits.to_string();
    }

    section.split(' ').filter_map(lookup).collect()
}

/// True when the string is non-empty and made only of ASCII digits and periods.
pub fn is_numeric_score(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Parse a raw value all the way to a finite score, or `None` if it is not one.
pub fn score_value(raw: &Value) -> Option<f64> {
    let text = parse(raw);
    let text = text.trim();
    if !is_numeric_score(text) {
        return None;
    }
    text.parse::<f64>().ok().filter(|score| score.is_finite())
}
