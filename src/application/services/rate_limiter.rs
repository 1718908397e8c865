//! Fixed-window rate limiter backed by the shared store.

use crate::domain::store::{KeyValueStore, StoreResult, keys};
use std::sync::Arc;
use std::time::Duration;

/// Fixed-window request counter keyed per caller identity.
///
/// Each call atomically increments `rl:<identity>`. When the increment
/// creates the key (post-increment count of 1), the window lifetime is
/// bound to first use by putting the window duration on the key as a TTL.
/// The request is allowed while the count stays within the limit.
///
/// Anchoring the window to first use avoids a separate reset scheduler and
/// keeps the limiter stateless beyond the store; correctness rests entirely
/// on the store's atomic increment.
///
/// Accepted trade-offs:
/// - a fixed window admits up to 2x the limit across a window boundary;
/// - if the process dies between the first increment and the expire call,
///   the key persists without a TTL and permanently caps that identity at
///   the limit. Known degradation mode, not repaired automatically.
pub struct FixedWindowLimiter {
    store: Arc<dyn KeyValueStore>,
    limit: i64,
    window: Duration,
}

impl FixedWindowLimiter {
    /// Creates a limiter allowing `limit` requests per `window` per identity.
    pub fn new(store: Arc<dyn KeyValueStore>, limit: i64, window: Duration) -> Self {
        Self {
            store,
            limit,
            window,
        }
    }

    /// Returns whether a request from `identity` fits the current window.
    ///
    /// # Errors
    ///
    /// Store failures propagate unchanged; the caller decides whether to
    /// fail open or closed. A failure is never reported as "allowed".
    pub async fn allow(&self, identity: &str) -> StoreResult<bool> {
        let key = keys::rate_window(identity);

        let count = self.store.increment(&key).await?;

        if count == 1 {
            self.store.expire(&key, self.window).await?;
        }

        Ok(count <= self.limit)
    }
}
