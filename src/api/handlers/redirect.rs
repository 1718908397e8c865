//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The hit counter is incremented best-effort by the Link Service; a
/// counting failure never turns a resolvable code into an error.
///
/// # Errors
///
/// Returns 404 Not Found when the code was never created or its TTL has
/// elapsed, and 503 Service Unavailable when the store cannot be reached.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let long_url = state.link_service.resolve(&code).await?;

    Ok(Redirect::temporary(&long_url))
}
