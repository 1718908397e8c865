//! Handler for the health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Reports service readiness.
///
/// # Endpoint
///
/// `GET /healthcheck`
///
/// Deliberately performs no store interaction: the process is ready as soon
/// as it serves traffic, and store failures surface per-request instead of
/// flapping the whole instance.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
