//! Access-token record returned by the token service.

use serde::{Deserialize, Serialize};

/// Resolved access token.
///
/// Only ever received from the token service; the gate never stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Opaque token identifier.
    pub id: String,
    /// End user the token was issued to.
    pub user_id: i64,
    /// Application the token was issued for.
    pub client_id: i64,
}
