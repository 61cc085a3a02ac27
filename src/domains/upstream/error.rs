//! Upstream API error types.

use thiserror::Error;

/// Errors that can occur while talking to the Exchange Rates API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The API answered with a non-success HTTP status.
    #[error("Exchange Rates API error: {status} - {message}")]
    Status { status: u16, message: String },

    /// The API answered 2xx but flagged the request as failed (`success: false`).
    #[error("Exchange Rates API rejected the request: {0}")]
    Rejected(String),

    /// The request could not be sent or the connection failed.
    #[error("Network error: {0}")]
    Network(String),

    /// No response arrived within the configured timeout.
    #[error("Exchange Rates API request timed out after {0}s")]
    Timeout(u64),

    /// The response body was not what the caller expected.
    #[error("Invalid response from Exchange Rates API: {0}")]
    InvalidResponse(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(String),
}

impl UpstreamError {
    /// Create a status error.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Create a network error.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create an invalid response error.
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }
}
