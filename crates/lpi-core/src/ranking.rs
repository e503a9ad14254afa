//! Ranked deduplication with a tie-inclusive cutoff.

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::normalizer::score_value;
use crate::row::{canonical_key, field_text, RawRow, ResultRow, COUNTRY, LPI_SCORE, REGION};

/// Best-known score for one country within a single ranking call.
#[derive(Debug, Clone)]
struct CountryScore {
    display_name: String,
    region: Value,
    score: f64,
}

/// Deduplicate rows by country and return the top `limit`, ties included.
///
/// Each canonical country keeps its highest-scoring row; on an exact tie the
/// row seen first is kept. Entries are ordered by descending score, with
/// equal scores kept in first-encounter order. Every entry scoring at least
/// as high as the entry at rank `limit` is returned, so the result can be
/// longer than `limit`. A missing, non-positive or oversized `limit` returns
/// every country.
///
/// Rows without a country, with a blank country, or with a score that does
/// not normalize to a number are dropped.
pub fn top_n(rows: &[RawRow], limit: Option<i64>) -> Vec<ResultRow> {
    let best = best_by_country(rows);

    let mut ranked: Vec<CountryScore> = best.into_values().collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    let Some(threshold) = threshold_score(&ranked, limit) else {
        return Vec::new();
    };

    ranked
        .into_iter()
        .filter(|entry| entry.score >= threshold)
        .map(|entry| ResultRow {
            country: entry.display_name,
            region: entry.region,
            lpi_score: entry.score,
        })
        .collect()
}

/// Fold rows into the best entry per canonical key, in first-seen key order.
fn best_by_country(rows: &[RawRow]) -> IndexMap<String, CountryScore> {
    let mut best: IndexMap<String, CountryScore> = IndexMap::new();

    for row in rows {
        let Some((display_name, score)) = country_score(row) else {
            continue;
        };
        let key = canonical_key(&display_name);
        debug!("country {:?} -> key {}", display_name, key);

        let entry = CountryScore {
            display_name,
            region: row.get(REGION).cloned().unwrap_or(Value::Null),
            score,
        };

        match best.entry(key) {
            Entry::Occupied(mut existing) => {
                if entry.score > existing.get().score {
                    existing.insert(entry);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(entry);
            }
        }
    }

    best
}

/// Trimmed country name and parsed score, if the row is usable.
fn country_score(row: &RawRow) -> Option<(String, f64)> {
    let country = field_text(row, COUNTRY)?;
    let raw_score = row.get(LPI_SCORE).filter(|v| !v.is_null())?;

    let country = country.trim();
    if country.is_empty() {
        debug!("dropping row with blank country");
        return None;
    }

    match score_value(raw_score) {
        Some(score) => Some((country.to_string(), score)),
        None => {
            debug!("dropping {}: unparsable score {}", country, raw_score);
            None
        }
    }
}

/// Score at rank `limit` (1-indexed), or the lowest score when the limit
/// does not select a rank. `None` only for an empty ranking.
fn threshold_score(ranked: &[CountryScore], limit: Option<i64>) -> Option<f64> {
    let cutoff = limit
        .filter(|&n| n > 0)
        .and_then(|n| usize::try_from(n).ok())
        .filter(|&n| n <= ranked.len());

    match cutoff {
        Some(n) => ranked.get(n - 1).map(|entry| entry.score),
        None => ranked.last().map(|entry| entry.score),
    }
}
