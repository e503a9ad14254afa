//! In-memory collaborators for the LPI question pipeline.
//!
//! This crate provides implementations of the `lpi-ask` collaborator traits
//! that need no network:
//! - `StaticTranslator` - keyword table from question to query path
//! - `FailingTranslator` - always errors
//! - `MemoryStore` - serves fixed rows and records requested paths
//! - `FailingStore` - always errors
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use mock_source::{MemoryStore, StaticTranslator};
//! use lpi_ask::{AskConfig, AskService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lpi_ask::AskError> {
//!     let store = MemoryStore::new(Vec::new());
//!     let translator = StaticTranslator::new("/rest/v1/countries_lpi?select=*");
//!     let service = AskService::new(AskConfig::default(), Arc::new(translator), Arc::new(store));
//!
//!     let answer = service.ask("countries in Asia").await?;
//!     assert!(answer.is_empty());
//!     Ok(())
//! }
//! ```

mod store;
mod translator;

pub use store::{FailingStore, MemoryStore};
pub use translator::{FailingTranslator, StaticTranslator};
