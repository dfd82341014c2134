//! Error types for dq-ai

use thiserror::Error;

/// AI analysis errors
#[derive(Error, Debug)]
pub enum AiError {
    /// Completion error (A001) - the text-generation service was
    /// unreachable, rejected the request, or returned nothing usable
    #[error("[A001] Completion failed: {0}")]
    Completion(String),

    /// Validation error (A002) - required input missing; rejected
    /// before any I/O
    #[error("[A002] {0}")]
    Validation(String),

    /// Template error (A003) - prompt template failed to render
    #[error("[A003] Prompt template error: {0}")]
    Template(String),
}

/// Result type alias for AiError
pub type AiResult<T> = Result<T, AiError>;

impl From<minijinja::Error> for AiError {
    fn from(err: minijinja::Error) -> Self {
        AiError::Template(err.to_string())
    }
}

impl From<serde_json::Error> for AiError {
    fn from(err: serde_json::Error) -> Self {
        AiError::Template(err.to_string())
    }
}
