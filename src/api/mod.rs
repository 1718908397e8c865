//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into Link Service calls and formats responses
//! according to the wire contract (camelCase field names).
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers

pub mod dto;
pub mod handlers;
