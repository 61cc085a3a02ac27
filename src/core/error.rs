//! Error types and handling for the MCP server.
//!
//! Errors raised while assembling the server. Failures during a request are
//! reported to the client by the transport instead.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for server startup.
#[derive(Debug, Error)]
pub enum Error {
    /// The upstream HTTP client could not be built.
    #[error("Upstream error: {0}")]
    Upstream(#[from] crate::domains::upstream::UpstreamError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
