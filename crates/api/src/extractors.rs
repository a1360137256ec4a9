//! Request extractors.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use oauth::{get_caller_id, get_client_id, is_public};
use serde::{Deserialize, Serialize};

/// Identity stamped on the request by the gate.
///
/// Ids are 0 when the request is anonymous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub public: bool,
    pub client_id: i64,
    pub caller_id: i64,
}

impl Identity {
    pub fn from_parts(parts: &Parts) -> Self {
        Self {
            public: is_public(Some(parts)),
            client_id: get_client_id(Some(parts)),
            caller_id: get_caller_id(Some(parts)),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}
