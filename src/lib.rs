//! # tinylink
//!
//! A small Redis-backed URL shortener built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the store capability trait
//! - **Application Layer** ([`application`]) - Rate limiter, code allocator, link service
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory store backends
//! - **API Layer** ([`api`]) - HTTP handlers and DTOs
//!
//! ## Design
//!
//! All shared mutable state (rate windows, mappings, hit counters) lives in
//! the external store behind atomic primitives; the process itself holds
//! nothing but a pooled connection handle, so any number of instances can
//! serve the same data concurrently without client-side locking.
//!
//! - Short codes are random URL-safe tokens claimed with atomic
//!   set-if-absent and a bounded collision retry.
//! - Creation is rate limited per caller identity with a fixed window
//!   anchored to first use (accepting up to 2x burst at window boundaries).
//! - Redirects count hits best-effort; counting failures never fail the
//!   redirect.
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"
//! export BASE_URL="http://localhost:3000"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CodeAllocator, FixedWindowLimiter, LinkService};
    pub use crate::domain::link::{Link, LinkStats};
    pub use crate::domain::store::{KeyValueStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
