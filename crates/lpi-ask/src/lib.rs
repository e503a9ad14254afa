//! Question answering over the country LPI table.
//!
//! This crate wires the pure cleaning engine in `lpi-core` to the two
//! external collaborators:
//!
//! - [`QueryTranslator`] - turns a question into a record-store query path
//! - [`RecordStore`] - fetches raw rows for a path
//!
//! [`AskService`] detects what a question wants ([`Intent`]), picks the path,
//! fetches rows and returns an [`Answer`].
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use lpi_ask::{AskConfig, AskService};
//!
//! let service = AskService::new(AskConfig::from_env()?, translator, store);
//! let answer = service.ask("top 5 countries in logistics").await?;
//! println!("{}", answer.to_json()?);
//! ```

mod answer;
mod config;
mod error;
mod intent;
mod service;
mod source;

pub use answer::{Answer, TextReply};
pub use config::{AskConfig, DEFAULT_NOT_APPLICABLE_MESSAGE, DEFAULT_TABLE, DEFAULT_TOP_LIMIT};
pub use error::{AskError, SourceError};
pub use intent::{detect, Intent};
pub use service::AskService;
pub use source::{QueryTranslator, RecordStore};

// Re-export for collaborator implementations
pub use async_trait::async_trait;
pub use lpi_core::{RawRow, ResultRow};
