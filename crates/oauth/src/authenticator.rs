//! Per-request authentication.
//!
//! Clears any client-supplied trust headers, resolves the `access_token`
//! query parameter with the token service, and stamps the resolved client
//! and caller ids back onto the request.

use gate_core::{headers::PARAM_ACCESS_TOKEN, AccessToken, RestError};
use http::{HeaderValue, Uri};
use std::sync::Arc;
use tracing::debug;

use crate::client::TokenLookup;
use crate::request::{InboundRequest, X_CALLER_ID, X_CLIENT_ID};

/// Authentication pipeline shared across requests.
#[derive(Clone)]
pub struct Authenticator {
    lookup: Arc<dyn TokenLookup>,
}

impl Authenticator {
    pub fn new(lookup: Arc<dyn TokenLookup>) -> Self {
        Self { lookup }
    }

    /// Authenticate a request in place.
    ///
    /// `Ok(())` covers both an authenticated request and an anonymous one
    /// (no token, or a token the service does not know). Any other lookup
    /// failure is returned unchanged and the request must be rejected.
    pub async fn authenticate_request<R: InboundRequest>(
        &self,
        request: Option<&mut R>,
    ) -> Result<(), RestError> {
        let Some(request) = request else {
            return Ok(());
        };

        strip_trust_headers(request);

        let Some(token_id) = access_token_param(request.uri()) else {
            return Ok(());
        };

        let token = match self.lookup.fetch_access_token(&token_id).await {
            Ok(token) => token,
            // Unknown token is treated as anonymous.
            Err(err) if err.is_not_found() => {
                debug!("Access token not found, continuing anonymously");
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        stamp_identity(request, &token);
        Ok(())
    }
}

/// Remove every `X-Client-Id` and `X-Caller-Id` value from the request.
pub fn strip_trust_headers<R: InboundRequest>(request: &mut R) {
    let headers = request.headers_mut();
    headers.remove(X_CLIENT_ID);
    headers.remove(X_CALLER_ID);
}

fn stamp_identity<R: InboundRequest>(request: &mut R, token: &AccessToken) {
    let headers = request.headers_mut();
    headers.insert(X_CLIENT_ID, HeaderValue::from(token.client_id));
    headers.insert(X_CALLER_ID, HeaderValue::from(token.user_id));
}

/// First `access_token` query value, trimmed. `None` when missing or blank.
fn access_token_param(uri: &Uri) -> Option<String> {
    let query = uri.query()?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == PARAM_ACCESS_TOKEN)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
