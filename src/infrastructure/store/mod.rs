//! Key-value store backends.
//!
//! Provides two implementations of [`crate::domain::store::KeyValueStore`]:
//! - [`RedisStore`] - production Redis backend
//! - [`MemoryStore`] - in-process backend for tests and Redis-less development

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
