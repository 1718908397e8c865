//! Utility functions for code generation and request handling.
//!
//! - [`code_generator`] - Short code generation
//! - [`client_ip`] - Caller identity extraction for rate limiting

pub mod client_ip;
pub mod code_generator;
