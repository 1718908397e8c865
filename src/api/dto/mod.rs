//! Data Transfer Objects for API endpoints.

pub mod health;
pub mod shorten;
pub mod stats;
