//! English number-word table covering 0-99.

use std::collections::HashMap;

use once_cell::sync::Lazy;

const UNITS: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

// Indexed by tens digit; 0 and 1 are covered by UNITS.
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

static NUMBER_WORDS: Lazy<HashMap<String, String>> = Lazy::new(build_number_words);

/// Build the word-to-digits table.
///
/// Keys are lowercase. Compounds from twenty upward appear in both the
/// hyphenated ("thirty-two") and space-separated ("thirty two") spellings.
pub fn build_number_words() -> HashMap<String, String> {
    let mut table = HashMap::with_capacity(20 + 8 * 19);

    for (value, word) in UNITS.iter().enumerate() {
        table.insert((*word).to_string(), value.to_string());
    }

    for (tens, tens_word) in TENS.iter().enumerate().skip(2) {
        table.insert((*tens_word).to_string(), (tens * 10).to_string());
        for (units, unit_word) in UNITS.iter().enumerate().take(10).skip(1) {
            let value = (tens * 10 + units).to_string();
            table.insert(format!("{} {}", tens_word, unit_word), value.clone());
            table.insert(format!("{}-{}", tens_word, unit_word), value);
        }
    }

    table
}

/// The process-wide table, built on first access.
pub fn number_words() -> &'static HashMap<String, String> {
    &NUMBER_WORDS
}

/// Look up a single lowercase word or compound.
pub fn lookup(word: &str) -> Option<&'static str> {
    NUMBER_WORDS.get(word).map(String::as_str)
}
