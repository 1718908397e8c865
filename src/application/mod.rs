//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::store::KeyValueStore`] trait and
//! provide a clean API for HTTP handlers. No service holds mutable state of
//! its own; every counter and claim lives in the store.
//!
//! # Available Services
//!
//! - [`services::rate_limiter::FixedWindowLimiter`] - creation-path rate limiting
//! - [`services::code_allocator::CodeAllocator`] - unique short-code claims
//! - [`services::link_service::LinkService`] - create/resolve/stats orchestration

pub mod services;
