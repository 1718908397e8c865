//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the long URL and hit count for a short link.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// A never-resolved code reports `hits: 0`, not an error.
///
/// # Errors
///
/// Same classes as redirect: 404 for unknown/expired codes, 503 when the
/// store cannot be reached.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.link_service.stats(&code).await?;

    Ok(Json(StatsResponse {
        code: stats.code,
        long_url: stats.long_url,
        hits: stats.hits,
    }))
}
