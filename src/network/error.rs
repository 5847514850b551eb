//! Gateway error type

use thiserror::Error;

/// Any failure reported by the API gateway.
///
/// Callers treat this as opaque; the variants only exist so log lines can say
/// what went wrong.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Transport, timeout, or body decoding failure
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The server answered with a non-success status
    #[error("server returned {status} for {url}")]
    Status { status: u16, url: String },
    /// Error produced by a non-HTTP gateway
    #[error("{0}")]
    Other(String),
}

impl NetworkError {
    pub fn other(message: impl Into<String>) -> Self {
        NetworkError::Other(message.into())
    }
}
