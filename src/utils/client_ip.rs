//! Caller identity extraction for rate limiting.

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Returns the identity string used to key the rate-limit window.
///
/// By default this is the peer socket IP. When `behind_proxy` is `true` the
/// `X-Forwarded-For` (first entry) or `X-Real-IP` header takes precedence;
/// enable that only when the service runs behind a trusted reverse proxy,
/// since the headers are otherwise client-controlled.
pub fn client_identity(addr: &SocketAddr, headers: &HeaderMap, behind_proxy: bool) -> String {
    if behind_proxy {
        if let Some(forwarded) = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            return forwarded.to_string();
        }

        if let Some(real_ip) = headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            return real_ip.to_string();
        }
    }

    addr.ip().to_string()
}
