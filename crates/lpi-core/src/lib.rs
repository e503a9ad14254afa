//! Normalization and ranking engine for country logistics-performance rows.
//!
//! Rows fetched from the record store are human-entered and messy: scores may
//! be numerals or phrases like "three point six six", and the same country
//! can appear under several spellings ("Viet Nam", "Vietnam"). This crate
//! cleans those rows without ever failing; anything it cannot interpret is
//! dropped.
//!
//! - [`parse`] / [`parse_str`] - normalize a score value to a decimal string.
//! - [`top_n`] - deduplicate by country and return a tie-inclusive top N.
//! - [`region_averages`] - mean score per region.
//! - [`above`] - rows strictly above a threshold, one per country.
//!
//! Everything here is synchronous and free of shared mutable state; the
//! number-word table is built once and only read afterwards.
//!
//! # Example
//!
//! ```rust
//! use lpi_core::{parse_str, raw_row, top_n};
//!
//! assert_eq!(parse_str("three point six six"), "3.66");
//!
//! let rows = vec![
//!     raw_row("Singapore", "Asia", "4.3"),
//!     raw_row("SINGAPORE", "Asia", "3.0"),
//!     raw_row("Viet Nam", "Asia", "three point two five"),
//! ];
//! let ranked = top_n(&rows, Some(5));
//! assert_eq!(ranked.len(), 2);
//! assert_eq!(ranked[0].country, "Singapore");
//! ```

mod normalizer;
mod numbers;
mod ranking;
mod regions;
mod row;
mod threshold;

pub use normalizer::{is_numeric_score, parse, parse_str, score_value};
pub use numbers::{build_number_words, lookup as lookup_number_word, number_words};
pub use ranking::top_n;
pub use regions::region_averages;
pub use row::{
    canonical_key, field_text, raw_row, value_text, RawRow, ResultRow, COUNTRY, LPI_SCORE, REGION,
};
pub use threshold::{above, extract_threshold};
