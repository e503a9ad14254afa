//! Per-region average scores.

use indexmap::IndexMap;
use tracing::debug;

use crate::normalizer::score_value;
use crate::row::{field_text, RawRow, LPI_SCORE, REGION};

/// Average score per region.
///
/// Regions are keyed by their trimmed, uppercased name, in first-seen order.
/// Rows without a region, or whose score does not normalize to a number,
/// are left out. Countries are not deduplicated here.
pub fn region_averages(rows: &[RawRow]) -> IndexMap<String, f64> {
    let mut totals: IndexMap<String, (f64, u32)> = IndexMap::new();

    for row in rows {
        let Some(region) = field_text(row, REGION) else {
            continue;
        };
        let Some(score) = row.get(LPI_SCORE).and_then(score_value) else {
            debug!("skipping {} row with unparsable score", region.trim());
            continue;
        };

        let total = totals.entry(region.trim().to_uppercase()).or_insert((0.0, 0));
        total.0 += score;
        total.1 += 1;
    }

    totals
        .into_iter()
        .map(|(region, (sum, count))| (region, sum / f64::from(count)))
        .collect()
}
