//! Token service client.
//!
//! Resolves a token id with `GET {base_url}/oauth/access_token/{token_id}`.
//! Every failure comes back as a [`RestError`]; nothing is retried.

use async_trait::async_trait;
use gate_core::{headers::ACCESS_TOKEN_PATH, AccessToken, Error, RestError, Result};
use tracing::debug;
use url::Url;

use crate::config::OAuthConfig;

const INVALID_RESPONSE: &str = "invalid response while trying to get access token";
const INVALID_ERROR_INTERFACE: &str = "invalid error interface while trying to get access token";
const INVALID_TOKEN_RESPONSE: &str = "error while trying to unmarshal token response";

/// Resolves token ids to access tokens.
#[async_trait]
pub trait TokenLookup: Send + Sync {
    /// Fetch the access token record for `token_id`.
    async fn fetch_access_token(&self, token_id: &str) -> std::result::Result<AccessToken, RestError>;
}

/// HTTP client for the token service.
///
/// Cloning is cheap and clones share one connection pool.
#[derive(Debug, Clone)]
pub struct OAuthClient {
    base_url: Url,
    http_client: reqwest::Client,
}

impl OAuthClient {
    /// Creates a client with the configured base URL and timeout.
    pub fn new(config: &OAuthConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            Error::invalid_config(format!("invalid oauth base url {:?}: {}", config.base_url, e))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(Error::invalid_config(format!(
                "oauth base url {:?} cannot carry a path",
                config.base_url
            )));
        }

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::http_client(e.to_string()))?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    fn access_token_url(&self, token_id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(ACCESS_TOKEN_PATH.split('/').filter(|s| !s.is_empty()))
                .push(token_id);
        }
        url
    }
}

#[async_trait]
impl TokenLookup for OAuthClient {
    async fn fetch_access_token(&self, token_id: &str) -> std::result::Result<AccessToken, RestError> {
        let url = self.access_token_url(token_id);

        debug!(url = %url, "Fetching access token");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| RestError::internal_server_error(INVALID_RESPONSE).with_cause(e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| RestError::internal_server_error(INVALID_RESPONSE).with_cause(e))?;

        debug!(status = %status, "Token service responded");

        if status.as_u16() > 299 {
            let err = RestError::from_bytes(&body).map_err(|e| {
                RestError::internal_server_error(INVALID_ERROR_INTERFACE).with_cause(e)
            })?;
            return Err(err);
        }

        serde_json::from_slice(&body)
            .map_err(|e| RestError::internal_server_error(INVALID_TOKEN_RESPONSE).with_cause(e))
    }
}
