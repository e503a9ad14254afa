//! Seams for the two external collaborators.
//!
//! The translator turns a free-text question into a record-store query path;
//! the store executes that path and returns raw rows. Neither is implemented
//! here, see the `mock-source` crate for in-memory versions.

use async_trait::async_trait;
use lpi_core::RawRow;

use crate::error::SourceError;

/// Translates a question into a query path for the record store.
///
/// A translator may return a string that is not a query path at all (for
/// off-topic questions); the caller checks the result.
#[async_trait]
pub trait QueryTranslator: Send + Sync {
    /// Translate the question into a query path.
    async fn translate(&self, question: &str) -> Result<String, SourceError>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}

/// Executes query paths against the record store.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch raw rows for a query path.
    async fn fetch(&self, path: &str) -> Result<Vec<RawRow>, SourceError>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}
