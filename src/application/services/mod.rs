//! Business logic services for the application layer.

pub mod code_allocator;
pub mod link_service;
pub mod rate_limiter;

pub use code_allocator::{AllocationError, CodeAllocator};
pub use link_service::LinkService;
pub use rate_limiter::FixedWindowLimiter;
