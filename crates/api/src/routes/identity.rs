//! Identity echo endpoint.

use axum::Json;

use crate::extractors::Identity;

/// GET /whoami - Returns the identity the gate attached to the request.
pub async fn whoami_handler(identity: Identity) -> Json<Identity> {
    Json(identity)
}
