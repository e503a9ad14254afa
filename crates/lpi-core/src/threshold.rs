//! Strict "above N" filtering.

use indexmap::map::Entry;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalizer::score_value;
use crate::row::{canonical_key, field_text, RawRow, COUNTRY, LPI_SCORE};

// ASCII digits only; a trailing period without digits is not part of the number.
static DECIMAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+(\.[0-9]+)?").expect("decimal pattern is valid"));

/// Rows scoring strictly above `threshold`, one per country, best first.
///
/// Duplicates by canonical country key keep the higher score (first seen on
/// ties). The original rows are returned untouched.
pub fn above(rows: &[RawRow], threshold: f64) -> Vec<RawRow> {
    let mut best: IndexMap<String, (f64, &RawRow)> = IndexMap::new();

    for row in rows {
        let Some(score) = row.get(LPI_SCORE).and_then(score_value) else {
            continue;
        };
        if score <= threshold {
            continue;
        }
        let Some(country) = field_text(row, COUNTRY) else {
            continue;
        };
        let key = canonical_key(&country);
        if key.is_empty() {
            continue;
        }

        match best.entry(key) {
            Entry::Occupied(mut existing) => {
                if score > existing.get().0 {
                    existing.insert((score, row));
                }
            }
            Entry::Vacant(slot) => {
                slot.insert((score, row));
            }
        }
    }

    let mut kept: Vec<(f64, &RawRow)> = best.into_values().collect();
    kept.sort_by(|a, b| b.0.total_cmp(&a.0));
    kept.into_iter().map(|(_, row)| row.clone()).collect()
}

/// First decimal literal in a question ("above 3.5" -> 3.5), or 0.
pub fn extract_threshold(question: &str) -> f64 {
    DECIMAL_RE
        .find(question)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}
