//! Answers returned to the caller.

use indexmap::IndexMap;
use lpi_core::{RawRow, ResultRow};
use serde::Serialize;

use crate::error::AskError;

/// A plain-text reply, serialized as `{"type": "text", "content": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextReply {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

impl TextReply {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            content: content.into(),
        }
    }
}

/// The answer to a question.
///
/// Serialized untagged, so clients see a list of rows, a region-to-average
/// object, or a text reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    /// Deduplicated, tie-inclusive ranking.
    Ranked(Vec<ResultRow>),
    /// Average score per uppercased region.
    Averages(IndexMap<String, f64>),
    /// Raw rows, filtered or as fetched.
    Rows(Vec<RawRow>),
    /// The question could not be answered from the data.
    Message(TextReply),
}

impl Answer {
    /// Number of entries in the answer (0 for a text reply).
    pub fn len(&self) -> usize {
        match self {
            Answer::Ranked(rows) => rows.len(),
            Answer::Averages(averages) => averages.len(),
            Answer::Rows(rows) => rows.len(),
            Answer::Message(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, AskError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_shape() {
        let answer = Answer::Message(TextReply::new("nope"));
        assert_eq!(answer.to_json().unwrap(), r#"{"type":"text","content":"nope"}"#);
        assert!(answer.is_empty());
    }

    #[test]
    fn test_ranked_shape() {
        let answer = Answer::Ranked(vec![ResultRow {
            country: "Singapore".to_string(),
            region: json!("Asia"),
            lpi_score: 4.3,
        }]);
        assert_eq!(
            answer.to_json().unwrap(),
            r#"[{"country":"Singapore","region":"Asia","lpi_score":4.3}]"#
        );
        assert_eq!(answer.len(), 1);
    }

    #[test]
    fn test_averages_shape() {
        let mut averages = IndexMap::new();
        averages.insert("ASIA".to_string(), 3.5);
        averages.insert("EUROPE".to_string(), 4.0);
        let answer = Answer::Averages(averages);
        assert_eq!(answer.to_json().unwrap(), r#"{"ASIA":3.5,"EUROPE":4.0}"#);
    }
}
