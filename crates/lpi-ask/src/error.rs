//! Error types for the question pipeline.

use thiserror::Error;

/// Errors raised by the external collaborators (translator, record store).
#[derive(Debug, Error)]
pub enum SourceError {
    /// The collaborator could not be reached.
    #[error("source unavailable: {0}")]
    Unavailable(String),

    /// The collaborator rejected our credentials.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The request was sent but failed.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The response could not be understood.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Errors that can occur while answering a question.
#[derive(Debug, Error)]
pub enum AskError {
    /// The question was empty or whitespace.
    #[error("question is empty")]
    EmptyQuestion,

    /// Fetching rows from the record store failed.
    #[error("record store error: {0}")]
    Store(#[from] SourceError),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Answer serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
