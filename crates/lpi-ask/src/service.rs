//! The question-answering pipeline.

use std::sync::Arc;

use lpi_core::{above, region_averages, top_n};
use tracing::{debug, info, warn};

use crate::answer::{Answer, TextReply};
use crate::config::AskConfig;
use crate::error::AskError;
use crate::intent::{detect, Intent};
use crate::source::{QueryTranslator, RecordStore};

/// Answers free-text questions about the LPI table.
///
/// Ranking questions go straight to the store with a fixed path; everything
/// else is translated first. Rows are cleaned locally by `lpi-core`.
pub struct AskService {
    config: AskConfig,
    translator: Arc<dyn QueryTranslator>,
    store: Arc<dyn RecordStore>,
}

impl AskService {
    /// Create a new service.
    pub fn new(
        config: AskConfig,
        translator: Arc<dyn QueryTranslator>,
        store: Arc<dyn RecordStore>,
    ) -> Self {
        Self {
            config,
            translator,
            store,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &AskConfig {
        &self.config
    }

    /// Answer a question.
    ///
    /// Off-topic questions, and questions the translator fails on, get a
    /// text reply rather than an error. Only store failures and empty
    /// questions are errors.
    pub async fn ask(&self, question: &str) -> Result<Answer, AskError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AskError::EmptyQuestion);
        }

        let intent = detect(question, self.config.default_limit);
        debug!("Question intent: {:?}", intent);

        let path = if intent.bypasses_translator() {
            self.config.top_path()
        } else {
            match self.translator.translate(question).await {
                Ok(path) => path.trim().to_string(),
                Err(e) => {
                    warn!("Translator {} failed: {}", self.translator.name(), e);
                    return Ok(self.not_applicable());
                }
            }
        };

        if !self.config.is_table_path(&path) {
            info!("Question is not about {}, declining", self.config.table);
            return Ok(self.not_applicable());
        }

        debug!("Fetching {} from {}", path, self.store.name());
        let rows = self.store.fetch(&path).await?;
        if rows.is_empty() {
            return Ok(Answer::Rows(Vec::new()));
        }

        let fetched = rows.len();
        let answer = match intent {
            Intent::TopN { limit } => Answer::Ranked(top_n(&rows, Some(limit))),
            Intent::RegionAverage => Answer::Averages(region_averages(&rows)),
            Intent::Above { threshold } => Answer::Rows(above(&rows, threshold)),
            Intent::Passthrough => Answer::Rows(rows),
        };

        info!("Answered with {} entries from {} rows", answer.len(), fetched);
        Ok(answer)
    }

    fn not_applicable(&self) -> Answer {
        Answer::Message(TextReply::new(self.config.not_applicable_message.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;
    use async_trait::async_trait;
    use lpi_core::{raw_row, RawRow};
    use std::sync::Mutex;

    struct FixedTranslator(Result<String, String>);

    #[async_trait]
    impl QueryTranslator for FixedTranslator {
        async fn translate(&self, _question: &str) -> Result<String, SourceError> {
            self.0.clone().map_err(SourceError::RequestFailed)
        }

        fn name(&self) -> &str {
            "FixedTranslator"
        }
    }

    struct RecordingStore {
        rows: Vec<RawRow>,
        paths: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl RecordStore for RecordingStore {
        async fn fetch(&self, path: &str) -> Result<Vec<RawRow>, SourceError> {
            self.paths.lock().unwrap().push(path.to_string());
            Ok(self.rows.clone())
        }

        fn name(&self) -> &str {
            "RecordingStore"
        }
    }

    fn service(translated: Result<&str, &str>, rows: Vec<RawRow>) -> (AskService, Arc<RecordingStore>) {
        let store = Arc::new(RecordingStore {
            rows,
            paths: Mutex::new(Vec::new()),
        });
        let translator = FixedTranslator(translated.map(str::to_string).map_err(str::to_string));
        let service = AskService::new(AskConfig::default(), Arc::new(translator), store.clone());
        (service, store)
    }

    #[tokio::test]
    async fn test_top_uses_fixed_path() {
        let (service, store) = service(
            Ok("ignored"),
            vec![raw_row("Singapore", "Asia", "4.3"), raw_row("SINGAPORE", "Asia", "3.0")],
        );

        let answer = service.ask("top 5 countries").await.unwrap();

        assert_eq!(answer.len(), 1);
        assert_eq!(
            store.paths.lock().unwrap().as_slice(),
            ["/rest/v1/countries_lpi?select=country,region,lpi_score"]
        );
    }

    #[tokio::test]
    async fn test_off_topic_declines_without_fetch() {
        let (service, store) = service(Ok("I only know about logistics."), vec![]);

        let answer = service.ask("tell me a joke").await.unwrap();

        assert!(matches!(answer, Answer::Message(_)));
        assert!(store.paths.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_translator_failure_declines() {
        let (service, _store) = service(Err("timeout"), vec![]);
        let answer = service.ask("countries in Asia").await.unwrap();
        assert!(matches!(answer, Answer::Message(_)));
    }

    #[tokio::test]
    async fn test_empty_question() {
        let (service, _store) = service(Ok("/rest/v1/countries_lpi"), vec![]);
        assert!(matches!(service.ask("   ").await, Err(AskError::EmptyQuestion)));
    }
}
