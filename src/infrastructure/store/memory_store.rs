//! In-memory store implementation for tests and Redis-less development.

use crate::domain::store::{KeyValueStore, StoreResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// TTL-aware in-process implementation of [`KeyValueStore`].
///
/// Mirrors the Redis semantics the services rely on: `increment` preserves
/// an existing TTL and creates keys without one, `set_if_absent` claims
/// atomically under the map lock, and expired keys read as absent. Time
/// comes from the tokio clock, so tests can pause and advance it.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn increment(&self, key: &str) -> StoreResult<i64> {
        let now = Instant::now();
        let mut entries = self.entries.lock().expect("memory store lock poisoned");

        // A fresh counter has no TTL until `expire` is called; an existing
        // one keeps its deadline, as Redis INCR does.
        let (next, expires_at) = match entries.get(key) {
            Some(entry) if !entry.is_expired(now) => (
                entry.value.parse::<i64>().unwrap_or(0) + 1,
                entry.expires_at,
            ),
            _ => (1, None),
        };

        entries.insert(
            key.to_string(),
            Entry {
                value: next.to_string(),
                expires_at,
            },
        );

        Ok(next)
    }

    async fn set_if_absent(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<bool> {
        let now = Instant::now();
        let mut entries = self.entries.lock().expect("memory store lock poisoned");

        if let Some(existing) = entries.get(key)
            && !existing.is_expired(now)
        {
            return Ok(false);
        }

        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Some(now + ttl),
            },
        );

        Ok(true)
    }

    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let now = Instant::now();
        let entries = self.entries.lock().expect("memory store lock poisoned");

        Ok(entries
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.value.clone()))
    }

    async fn expire(&self, key: &str, ttl: Duration) -> StoreResult<bool> {
        let now = Instant::now();
        let mut entries = self.entries.lock().expect("memory store lock poisoned");

        match entries.get_mut(key) {
            Some(entry) if !entry.is_expired(now) => {
                entry.expires_at = Some(now + ttl);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    #[tokio::test]
    async fn test_increment_starts_at_one() {
        let store = MemoryStore::new();

        assert_eq!(store.increment("counter").await.unwrap(), 1);
        assert_eq!(store.increment("counter").await.unwrap(), 2);
        assert_eq!(store.increment("counter").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_set_if_absent_claims_once() {
        let store = MemoryStore::new();
        let ttl = Duration::from_secs(60);

        assert!(store.set_if_absent("k", "first", ttl).await.unwrap());
        assert!(!store.set_if_absent("k", "second", ttl).await.unwrap());
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("first"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_key_reads_as_absent() {
        let store = MemoryStore::new();

        store
            .set_if_absent("k", "v", Duration::from_secs(10))
            .await
            .unwrap();
        assert!(store.get("k").await.unwrap().is_some());

        advance(Duration::from_secs(11)).await;

        assert!(store.get("k").await.unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_key_can_be_reclaimed() {
        let store = MemoryStore::new();
        let ttl = Duration::from_secs(10);

        assert!(store.set_if_absent("k", "first", ttl).await.unwrap());
        advance(Duration::from_secs(11)).await;
        assert!(store.set_if_absent("k", "second", ttl).await.unwrap());

        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("second"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_increment_preserves_ttl() {
        let store = MemoryStore::new();

        store.increment("counter").await.unwrap();
        store
            .expire("counter", Duration::from_secs(10))
            .await
            .unwrap();
        store.increment("counter").await.unwrap();

        advance(Duration::from_secs(11)).await;

        // Counter expired with its original deadline and restarts at 1.
        assert_eq!(store.increment("counter").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_expire_on_missing_key_returns_false() {
        let store = MemoryStore::new();

        assert!(!store.expire("ghost", Duration::from_secs(5)).await.unwrap());
    }
}
