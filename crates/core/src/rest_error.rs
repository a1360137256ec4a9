//! Normalized REST error shared with the token service.
//!
//! The same shape is produced locally and accepted from the remote service:
//!
//! ```json
//! {"message": "not found", "status": 404, "error": "not_found", "causes": []}
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Error categories produced by the gate itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed caller input.
    BadRequest,
    /// Token id did not resolve.
    NotFound,
    /// Transport or payload failure.
    InternalServerError,
}

impl ErrorKind {
    /// Get the machine-readable category string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::NotFound => "not_found",
            Self::InternalServerError => "internal_server_error",
        }
    }

    /// Get the HTTP status code.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::InternalServerError => 500,
        }
    }
}

/// Error value returned by the authentication pipeline.
///
/// Locally built errors always pair `status` and `kind` through
/// [`ErrorKind`]. Errors parsed from the token service are kept exactly as
/// the service sent them. `causes` accepts any JSON, since the service may
/// send `null` or structured entries.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("[{kind}] {message}")]
pub struct RestError {
    pub message: String,
    pub status: u16,
    #[serde(rename = "error")]
    pub kind: String,
    #[serde(
        default,
        deserialize_with = "deserialize_causes",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub causes: Vec<Value>,
}

fn deserialize_causes<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(causes) => causes,
        cause => vec![cause],
    })
}

impl RestError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: kind.http_status(),
            kind: kind.as_str().to_string(),
            causes: Vec::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    /// Attach the underlying failure.
    pub fn with_cause(mut self, cause: impl ToString) -> Self {
        self.causes.push(Value::String(cause.to_string()));
        self
    }

    /// Whether this error means the token id is unknown to the service.
    pub fn is_not_found(&self) -> bool {
        self.status == ErrorKind::NotFound.http_status()
    }

    /// Parse an error payload sent by the token service.
    pub fn from_bytes(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}
