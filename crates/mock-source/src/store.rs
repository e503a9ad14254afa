//! In-memory record store.

use async_trait::async_trait;
use lpi_ask::{RawRow, RecordStore, SourceError};
use tokio::sync::Mutex;

/// A record store that serves a fixed set of rows for every path.
///
/// Paths are recorded so tests can check what was requested.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Vec<RawRow>,
    requested: Mutex<Vec<String>>,
}

impl MemoryStore {
    /// Create a store serving the given rows.
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self {
            rows,
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Paths fetched so far, oldest first.
    pub async fn requested_paths(&self) -> Vec<String> {
        self.requested.lock().await.clone()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn fetch(&self, path: &str) -> Result<Vec<RawRow>, SourceError> {
        self.requested.lock().await.push(path.to_string());
        Ok(self.rows.clone())
    }

    fn name(&self) -> &str {
        "MemoryStore"
    }
}

/// A record store that always fails, e.g. to simulate bad credentials.
#[derive(Debug, Clone)]
pub struct FailingStore {
    error: fn(String) -> SourceError,
    reason: String,
}

impl FailingStore {
    /// Fail every fetch as unauthorized.
    pub fn unauthorized(reason: impl Into<String>) -> Self {
        Self {
            error: SourceError::Unauthorized,
            reason: reason.into(),
        }
    }

    /// Fail every fetch as unreachable.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            error: SourceError::Unavailable,
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl RecordStore for FailingStore {
    async fn fetch(&self, _path: &str) -> Result<Vec<RawRow>, SourceError> {
        Err((self.error)(self.reason.clone()))
    }

    fn name(&self) -> &str {
        "FailingStore"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lpi_core::raw_row;

    #[tokio::test]
    async fn test_memory_store_records_paths() {
        let store = MemoryStore::new(vec![raw_row("Chile", "Americas", "3.1")]);

        let rows = store.fetch("/rest/v1/a").await.unwrap();
        store.fetch("/rest/v1/b").await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(store.requested_paths().await, vec!["/rest/v1/a", "/rest/v1/b"]);
    }

    #[tokio::test]
    async fn test_failing_store() {
        let store = FailingStore::unauthorized("bad key");
        match store.fetch("/rest/v1/a").await {
            Err(SourceError::Unauthorized(reason)) => assert_eq!(reason, "bad key"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
