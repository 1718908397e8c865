//! Link creation, resolution, and statistics.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tracing::warn;
use url::Url;

use crate::application::services::code_allocator::{AllocationError, CodeAllocator};
use crate::application::services::rate_limiter::FixedWindowLimiter;
use crate::domain::link::{Link, LinkStats};
use crate::domain::store::{KeyValueStore, keys};
use crate::error::AppError;

/// Orchestrates the rate limiter and code allocator for link creation, and
/// performs lookup plus best-effort hit counting for resolution.
///
/// The service holds no mutable state; every counter and mapping lives in
/// the shared store, so any number of instances (or processes) can run
/// against the same data.
pub struct LinkService {
    store: Arc<dyn KeyValueStore>,
    limiter: FixedWindowLimiter,
    allocator: CodeAllocator,
    mapping_ttl: Duration,
    base_url: String,
    rate_limit_fail_open: bool,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `rate_limit_fail_open` names the policy for limiter store failures:
    /// `false` (the default configuration) rejects creation when the limiter
    /// cannot be consulted, `true` lets the request through. Either way the
    /// failure is logged; it is never silently reported as "allowed".
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        limiter: FixedWindowLimiter,
        allocator: CodeAllocator,
        mapping_ttl: Duration,
        base_url: String,
        rate_limit_fail_open: bool,
    ) -> Self {
        Self {
            store,
            limiter,
            allocator,
            mapping_ttl,
            base_url,
            rate_limit_fail_open,
        }
    }

    /// Creates a short link for `long_url` on behalf of `identity`.
    ///
    /// The limiter runs before URL validation, so a caller reaching this
    /// method with an invalid URL still consumes a window slot; invalid
    /// input never writes a mapping key.
    ///
    /// # Errors
    ///
    /// - [`AppError::RateLimited`] when the window budget is spent
    /// - [`AppError::Validation`] when `long_url` is not an absolute URL
    /// - [`AppError::AllocationExhausted`] when no unique code was claimed
    ///   within the attempt bound
    /// - [`AppError::StoreUnavailable`] on store failure (including limiter
    ///   failure under the fail-closed policy)
    pub async fn create(&self, identity: &str, long_url: &str) -> Result<Link, AppError> {
        let allowed = match self.limiter.allow(identity).await {
            Ok(allowed) => allowed,
            Err(e) if self.rate_limit_fail_open => {
                warn!("Rate limiter store failure, failing open: {}", e);
                true
            }
            Err(e) => {
                warn!("Rate limiter store failure, failing closed: {}", e);
                return Err(e.into());
            }
        };

        if !allowed {
            return Err(AppError::rate_limited("Rate limit exceeded", json!({})));
        }

        Url::parse(long_url).map_err(|e| {
            AppError::bad_request(
                "longUrl is not a valid URL",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let code = match self.allocator.allocate(long_url, self.mapping_ttl).await {
            Ok(code) => code,
            Err(AllocationError::Exhausted { attempts }) => {
                return Err(AppError::allocation_exhausted(
                    "Failed to claim a unique code",
                    json!({ "attempts": attempts }),
                ));
            }
            Err(AllocationError::Store(e)) => return Err(e.into()),
        };

        Ok(Link {
            code,
            long_url: long_url.to_string(),
        })
    }

    /// Resolves a short code to its long URL and counts the hit.
    ///
    /// The hit increment is best-effort: its failure is logged and swallowed
    /// so the redirect succeeds even when counting does not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown or expired codes, and
    /// [`AppError::StoreUnavailable`] when the mapping lookup itself fails.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let long_url = self
            .store
            .get(&keys::mapping(code))
            .await?
            .ok_or_else(|| AppError::not_found("Short code not found", json!({ "code": code })))?;

        if let Err(e) = self.store.increment(&keys::hits(code)).await {
            warn!("Failed to count hit for {}: {}", code, e);
        }

        Ok(long_url)
    }

    /// Returns the long URL and hit count for a short code.
    ///
    /// An absent hit counter reads as zero: a freshly created, never-resolved
    /// code legitimately has no counter key yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown or expired codes.
    pub async fn stats(&self, code: &str) -> Result<LinkStats, AppError> {
        let long_url = self
            .store
            .get(&keys::mapping(code))
            .await?
            .ok_or_else(|| AppError::not_found("Short code not found", json!({ "code": code })))?;

        let hits = self
            .store
            .get(&keys::hits(code))
            .await?
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        Ok(LinkStats {
            code: code.to_string(),
            long_url,
            hits,
        })
    }

    /// Composes the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
