//! Setup errors for the oauth gate.
//!
//! These cover building the gate (bad configuration, HTTP client
//! construction). Per-request failures use [`crate::RestError`] instead.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing gate components.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("http client error: {0}")]
    HttpClient(String),
}

impl Error {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn http_client(msg: impl Into<String>) -> Self {
        Self::HttpClient(msg.into())
    }
}
