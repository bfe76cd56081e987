//! Store Errors
//!
//! The single error type reported by every gateway operation.

use thiserror::Error;

/// Common result type for gateway operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Anything the remote store or the path to it reported.
///
/// Every variant carries the message as the store (or the transport) phrased
/// it; callers log it and move on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Endpoint or credential missing or unusable
    #[error("store is not configured: {0}")]
    Config(String),

    /// The request never produced an HTTP response
    #[error("transport error: {0}")]
    Transport(String),

    /// The store answered with a non-success status
    #[error("store rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The store answered but the body did not match the task schema
    #[error("malformed store response: {0}")]
    Decode(String),
}

impl StoreError {
    /// The store's own wording, without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            StoreError::Config(msg)
            | StoreError::Transport(msg)
            | StoreError::Decode(msg) => msg,
            StoreError::Rejected { message, .. } => message,
        }
    }
}
