//! Handler for the link shortening endpoint.

use axum::{
    Json,
    extract::{ConnectInfo, State},
    http::HeaderMap,
};
use std::net::SocketAddr;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_identity;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "longUrl": "https://example.com/a" }
/// ```
///
/// # Response
///
/// ```json
/// { "code": "nF8_zQx", "shortUrl": "http://localhost:3000/nF8_zQx", "longUrl": "https://example.com/a" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request when `longUrl` is missing or not an absolute URL
/// - 429 Too Many Requests when the caller's window budget is spent
/// - 500 Internal Server Error when no unique code could be claimed
/// - 503 Service Unavailable when the store cannot be reached
pub async fn shorten_handler(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let identity = client_identity(&addr, &headers, state.behind_proxy);

    let link = state
        .link_service
        .create(&identity, &payload.long_url)
        .await?;
    let short_url = state.link_service.short_url(&link.code);

    Ok(Json(ShortenResponse {
        code: link.code,
        short_url,
        long_url: link.long_url,
    }))
}
