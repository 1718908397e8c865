//! Capability contract for the shared key-value store.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors produced by [`KeyValueStore`] implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The initial connection could not be established at startup.
    #[error("store connection error: {0}")]
    Connection(String),

    /// An operation failed or timed out. Transient infrastructure failure;
    /// it propagates to the caller and is never converted into success.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Minimal capability interface over a shared key-value store with a flat
/// string key space.
///
/// The store is the only shared mutable state in the system: rate-limit
/// windows, short-code mappings, and hit counters all live behind this
/// trait, and all cross-request atomicity comes from [`increment`] and
/// [`set_if_absent`] being atomic at the store. Implementations must be
/// safe for concurrent use by many request flows and must bound every
/// operation with a timeout.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - production Redis backend
/// - [`crate::infrastructure::store::MemoryStore`] - in-process backend for
///   tests and Redis-less development
///
/// [`increment`]: KeyValueStore::increment
/// [`set_if_absent`]: KeyValueStore::set_if_absent
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Atomically increments the integer at `key` (initializing to 0 if
    /// absent) and returns the post-increment value.
    async fn increment(&self, key: &str) -> StoreResult<i64>;

    /// Atomically creates `key = value` with the given TTL only if `key`
    /// does not already exist. Returns whether the create succeeded.
    async fn set_if_absent(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<bool>;

    /// Returns the value at `key`, or `None` if the key is absent or its
    /// TTL has elapsed.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Sets or refreshes the TTL on an existing key. Returns `false` if the
    /// key does not exist.
    async fn expire(&self, key: &str, ttl: Duration) -> StoreResult<bool>;
}

/// Store key layout, preserved for compatibility with existing deployments.
///
/// All keys are flat strings with independent TTLs.
pub mod keys {
    /// Key binding a short code to its long URL.
    pub fn mapping(code: &str) -> String {
        format!("short:{code}")
    }

    /// Key holding the hit counter for a short code. Lives independently of
    /// the mapping key; it may outlive or expire before it.
    pub fn hits(code: &str) -> String {
        format!("hits:{code}")
    }

    /// Key holding the fixed-window request counter for a caller identity.
    pub fn rate_window(identity: &str) -> String {
        format!("rl:{identity}")
    }
}
