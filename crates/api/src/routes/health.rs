//! Health check endpoints.

use axum::{http::StatusCode, Json};
use telemetry::metrics;

use crate::response::HealthResponse;

/// GET /health - Liveness plus authentication counters.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        auth: metrics().snapshot(),
    })
}

/// GET /health/live - Liveness check (service is running).
pub async fn live_handler() -> StatusCode {
    StatusCode::OK
}
