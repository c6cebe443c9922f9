//! Persistence collaborator error types.

use thiserror::Error;

/// Errors raised while talking to the backend or a local store.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse a response or a local file.
    #[error("parse error: {0}")]
    Parse(String),

    /// The record addressed by id does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    /// Local file I/O failure.
    #[error("storage error: {0}")]
    Storage(String),
}
