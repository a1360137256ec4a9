//! Standardized API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gate_core::RestError;
use serde::{Deserialize, Serialize};
use telemetry::AuthMetricsSnapshot;

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub auth: AuthMetricsSnapshot,
}

/// Rejection carrying a [`RestError`] body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: RestError,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<RestError> for ApiError {
    fn from(err: RestError) -> Self {
        // Only error statuses may reject a request.
        let status = StatusCode::from_u16(err.status)
            .ok()
            .filter(|s| s.is_client_error() || s.is_server_error())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        Self { status, body: err }
    }
}
