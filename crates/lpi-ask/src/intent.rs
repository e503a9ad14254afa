//! Question intent detection.

use lpi_core::{extract_threshold, lookup_number_word};

/// What kind of answer a question asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Ranked, deduplicated top countries.
    TopN { limit: i64 },
    /// Mean score per region.
    RegionAverage,
    /// Countries strictly above a score.
    Above { threshold: f64 },
    /// Anything else; rows are returned as fetched.
    Passthrough,
}

impl Intent {
    /// Whether this intent uses the fixed ranking path instead of the translator.
    pub fn bypasses_translator(&self) -> bool {
        matches!(self, Intent::TopN { .. })
    }
}

/// Classify a question.
///
/// Ranking wins over averaging, which wins over thresholds.
pub fn detect(question: &str, default_limit: i64) -> Intent {
    let lower = question.to_lowercase();

    if question.contains("前五") {
        return Intent::TopN { limit: 5 };
    }
    if let Some(limit) = top_limit(&lower, default_limit) {
        return Intent::TopN { limit };
    }

    if lower.contains("average") || question.contains("平均") {
        return Intent::RegionAverage;
    }

    if lower.contains("above") || question.contains("高於") || question.contains("大於") {
        return Intent::Above {
            threshold: extract_threshold(question),
        };
    }

    Intent::Passthrough
}

/// Count following the word "top", in digits or words.
///
/// `None` if the question has no "top"; the default if no usable count follows it.
fn top_limit(lower: &str, default_limit: i64) -> Option<i64> {
    let words: Vec<&str> = lower
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '-'))
        .collect();

    let position = words.iter().position(|w| *w == "top")?;
    let count = words.get(position + 1).and_then(|next| parse_count(next));

    Some(count.filter(|&n| n > 0).unwrap_or(default_limit))
}

fn parse_count(word: &str) -> Option<i64> {
    if let Ok(n) = word.parse::<i64>() {
        return Some(n);
    }
    lookup_number_word(word).and_then(|digits| digits.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_with_digits() {
        assert_eq!(detect("Show the top 5 countries", 5), Intent::TopN { limit: 5 });
        assert_eq!(detect("TOP 10 please", 5), Intent::TopN { limit: 10 });
    }

    #[test]
    fn test_top_with_words() {
        assert_eq!(detect("top three countries", 5), Intent::TopN { limit: 3 });
        assert_eq!(detect("top twenty-one?", 5), Intent::TopN { limit: 21 });
    }

    #[test]
    fn test_top_without_count_uses_default() {
        assert_eq!(detect("which are the top countries", 7), Intent::TopN { limit: 7 });
        assert_eq!(detect("top 0 countries", 5), Intent::TopN { limit: 5 });
        assert_eq!(detect("top", 5), Intent::TopN { limit: 5 });
    }

    #[test]
    fn test_chinese_top_five() {
        assert_eq!(detect("物流分數前五名", 3), Intent::TopN { limit: 5 });
    }

    #[test]
    fn test_top_must_be_a_word() {
        assert_eq!(detect("laptop prices", 5), Intent::Passthrough);
        assert_eq!(detect("stop 5", 5), Intent::Passthrough);
    }

    #[test]
    fn test_average() {
        assert_eq!(detect("Average score by region", 5), Intent::RegionAverage);
        assert_eq!(detect("各區域平均", 5), Intent::RegionAverage);
    }

    #[test]
    fn test_above() {
        assert_eq!(
            detect("countries above 3.5", 5),
            Intent::Above { threshold: 3.5 }
        );
        assert_eq!(detect("分數高於 3 的國家", 5), Intent::Above { threshold: 3.0 });
        assert_eq!(detect("above everything", 5), Intent::Above { threshold: 0.0 });
    }

    #[test]
    fn test_precedence() {
        assert_eq!(detect("top 5 above 3.0", 5), Intent::TopN { limit: 5 });
        assert_eq!(detect("average above 3.0", 5), Intent::RegionAverage);
    }

    #[test]
    fn test_passthrough() {
        let intent = detect("Countries in Asia", 5);
        assert_eq!(intent, Intent::Passthrough);
        assert!(!intent.bypasses_translator());
        assert!(Intent::TopN { limit: 1 }.bypasses_translator());
    }
}
