//! Configuration for AskService.

use std::env;

use crate::error::AskError;

/// Default table holding the country rows.
pub const DEFAULT_TABLE: &str = "countries_lpi";

/// Default count for "top N" questions that don't name a count.
pub const DEFAULT_TOP_LIMIT: i64 = 5;

/// Default reply for questions the data cannot answer.
pub const DEFAULT_NOT_APPLICABLE_MESSAGE: &str =
    "I can only answer questions about LPI logistics data. Try asking about country scores or regional averages.";

/// Configuration for AskService.
#[derive(Debug, Clone)]
pub struct AskConfig {
    /// Record-store table; translated paths must mention it.
    pub table: String,
    /// Count used for "top" questions without an explicit count.
    pub default_limit: i64,
    /// Text returned when a question is not about the data.
    pub not_applicable_message: String,
}

impl Default for AskConfig {
    fn default() -> Self {
        Self {
            table: DEFAULT_TABLE.to_string(),
            default_limit: DEFAULT_TOP_LIMIT,
            not_applicable_message: DEFAULT_NOT_APPLICABLE_MESSAGE.to_string(),
        }
    }
}

impl AskConfig {
    /// Create a config for a specific table.
    pub fn with_table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Optional env vars:
    /// - `LPI_TABLE` (default: countries_lpi)
    /// - `LPI_TOP_LIMIT` (default: 5; non-positive or invalid values use the default)
    /// - `LPI_NOT_APPLICABLE_MESSAGE`
    pub fn from_env() -> Result<Self, AskError> {
        let table = env::var("LPI_TABLE").unwrap_or_else(|_| DEFAULT_TABLE.to_string());
        let table = table.trim().to_string();
        if table.is_empty() {
            return Err(AskError::Config("LPI_TABLE is empty".to_string()));
        }

        let default_limit = env::var("LPI_TOP_LIMIT")
            .ok()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_TOP_LIMIT);

        let not_applicable_message = env::var("LPI_NOT_APPLICABLE_MESSAGE")
            .unwrap_or_else(|_| DEFAULT_NOT_APPLICABLE_MESSAGE.to_string());

        Ok(Self {
            table,
            default_limit,
            not_applicable_message,
        })
    }

    /// Fixed path used for ranking questions.
    ///
    /// Ranking fetches only the core columns and does all filtering locally,
    /// so the translator is not consulted.
    pub fn top_path(&self) -> String {
        format!("/rest/v1/{}?select=country,region,lpi_score", self.table)
    }

    /// Whether a translated path targets the configured table.
    pub fn is_table_path(&self, path: &str) -> bool {
        path.contains(&self.table)
    }
}
