//! Static translator - maps questions to paths by keyword.

use async_trait::async_trait;
use lpi_ask::{QueryTranslator, SourceError};

/// A translator that answers from a fixed keyword table.
///
/// Rules are checked in insertion order against the lowercased question;
/// the first matching keyword wins, otherwise the fallback is returned.
#[derive(Debug, Clone)]
pub struct StaticTranslator {
    rules: Vec<(String, String)>,
    fallback: String,
}

impl StaticTranslator {
    /// Create a translator that always returns `fallback`.
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            rules: Vec::new(),
            fallback: fallback.into(),
        }
    }

    /// Create a translator that treats every question as off-topic.
    pub fn off_topic() -> Self {
        Self::new("I can only help with logistics data.")
    }

    /// Add a keyword rule.
    pub fn with_rule(mut self, keyword: impl Into<String>, path: impl Into<String>) -> Self {
        self.rules.push((keyword.into().to_lowercase(), path.into()));
        self
    }
}

#[async_trait]
impl QueryTranslator for StaticTranslator {
    async fn translate(&self, question: &str) -> Result<String, SourceError> {
        let lower = question.to_lowercase();
        let path = self
            .rules
            .iter()
            .find(|(keyword, _)| lower.contains(keyword.as_str()))
            .map(|(_, path)| path.clone())
            .unwrap_or_else(|| self.fallback.clone());
        Ok(path)
    }

    fn name(&self) -> &str {
        "StaticTranslator"
    }
}

/// A translator that always fails.
#[derive(Debug, Clone)]
pub struct FailingTranslator {
    reason: String,
}

impl FailingTranslator {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl QueryTranslator for FailingTranslator {
    async fn translate(&self, _question: &str) -> Result<String, SourceError> {
        Err(SourceError::Unavailable(self.reason.clone()))
    }

    fn name(&self) -> &str {
        "FailingTranslator"
    }
}
