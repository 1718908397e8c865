//! Redis-backed store implementation.

use crate::domain::store::{KeyValueStore, StoreError, StoreResult};
use async_trait::async_trait;
use redis::{
    AsyncCommands, Client,
    aio::{ConnectionManager, ConnectionManagerConfig},
};
use std::time::Duration;
use tracing::info;

/// Redis implementation of [`KeyValueStore`].
///
/// Uses `ConnectionManager` for connection reuse across concurrent request
/// flows; cloning the manager is cheap and shares the underlying
/// multiplexed connection. Connect and response timeouts bound every
/// operation so a slow or unreachable store cannot stall a request
/// indefinitely.
pub struct RedisStore {
    client: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `connect_timeout` - bound on establishing the connection
    /// - `response_timeout` - bound on each individual command
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(
        redis_url: &str,
        connect_timeout: Duration,
        response_timeout: Duration,
    ) -> StoreResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let config = ConnectionManagerConfig::new()
            .set_connection_timeout(Some(connect_timeout))
            .set_response_timeout(Some(response_timeout));

        let manager = ConnectionManager::new_with_config(client, config)
            .await
            .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }
}

fn op_error(e: redis::RedisError) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn increment(&self, key: &str) -> StoreResult<i64> {
        let mut conn = self.client.clone();
        conn.incr(key, 1).await.map_err(op_error)
    }

    async fn set_if_absent(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<bool> {
        let mut conn = self.client.clone();

        // SET key value NX EX <ttl>: OK when the key was claimed, nil when
        // it already existed.
        let reply: Option<String> = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("NX")
            .arg("EX")
            .arg(ttl.as_secs().max(1))
            .query_async(&mut conn)
            .await
            .map_err(op_error)?;

        Ok(reply.is_some())
    }

    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.client.clone();
        conn.get(key).await.map_err(op_error)
    }

    async fn expire(&self, key: &str, ttl: Duration) -> StoreResult<bool> {
        let mut conn = self.client.clone();
        conn.expire(key, ttl.as_secs().max(1) as i64)
            .await
            .map_err(op_error)
    }
}
