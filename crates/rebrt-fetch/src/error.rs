//! Error types for upstream fetches

use thiserror::Error;

/// Fetch errors
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level error (DNS, TLS, connection, body read)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body was not the JSON shape the caller asked for
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, FetchError>;
