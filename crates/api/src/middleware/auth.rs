//! Authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use gate_core::headers::HEADER_X_CLIENT_ID;
use std::time::Instant;
use telemetry::{metrics, AuthOutcome};
use tracing::{debug, warn};

use crate::response::ApiError;
use crate::state::AppState;

/// Run the gate on every request before it reaches a handler.
///
/// Anonymous requests pass through with the trust headers cleared; lookup
/// failures other than "not found" reject the request with the error's
/// status.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let started = Instant::now();

    let result = state
        .authenticator
        .authenticate_request(Some(&mut request))
        .await;

    if let Err(err) = result {
        metrics().record(AuthOutcome::Rejected, started.elapsed());
        warn!(
            status = err.status,
            error = %err,
            path = %request.uri().path(),
            "Request authentication failed"
        );
        return Err(err.into());
    }

    let outcome = if request.headers().contains_key(HEADER_X_CLIENT_ID) {
        AuthOutcome::Authenticated
    } else {
        AuthOutcome::Anonymous
    };
    metrics().record(outcome, started.elapsed());
    debug!(?outcome, "Request authenticated");

    Ok(next.run(request).await)
}
