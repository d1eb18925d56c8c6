//! Liveness endpoint.

use axum::Json;

use crate::response::HealthResponse;

/// GET /health.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
