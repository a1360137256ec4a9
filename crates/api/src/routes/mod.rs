//! API routes.

pub mod health;
pub mod identity;

use axum::{middleware::from_fn_with_state, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::middleware::authenticate;
use crate::state::AppState;

/// Creates the API router.
///
/// Everything except the health endpoints goes through the gate.
pub fn router(state: AppState) -> Router {
    let gated = Router::new()
        .route("/whoami", get(identity::whoami_handler))
        .route_layer(from_fn_with_state(state.clone(), authenticate));

    Router::new()
        .merge(gated)
        .route("/health", get(health::health_handler))
        .route("/health/live", get(health::live_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
