//! Application state shared across handlers.

use oauth::{Authenticator, OAuthClient, OAuthConfig, TokenLookup};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Request authenticator backed by the token service
    pub authenticator: Authenticator,
}

impl AppState {
    /// Creates state backed by the HTTP token service client.
    pub fn new(config: &OAuthConfig) -> gate_core::Result<Self> {
        let client = OAuthClient::new(config)?;
        Ok(Self::with_lookup(Arc::new(client)))
    }

    /// Creates state with a custom token lookup (used by tests).
    pub fn with_lookup(lookup: Arc<dyn TokenLookup>) -> Self {
        Self {
            authenticator: Authenticator::new(lookup),
        }
    }
}
