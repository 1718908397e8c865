//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /api/shorten`      - Create a short link (rate limited per caller)
//! - `GET  /api/stats/{code}` - Link statistics
//! - `GET  /healthcheck`      - Readiness probe (no store interaction)
//! - `GET  /{code}`           - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Deadline** - Overall per-request timeout wrapping the limiter check
//!   and all allocation attempts
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Constructs the application router with all routes and middleware.
///
/// `request_deadline` bounds each request as a unit, so a slow store cannot
/// leave a dangling retry loop behind a disconnected client.
pub fn app_router(state: AppState, request_deadline: Duration) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .route("/api/stats/{code}", get(stats_handler))
        .route("/healthcheck", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .layer(TimeoutLayer::new(request_deadline))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
