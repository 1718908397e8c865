//! Domain layer: the store capability contract and core entities.
//!
//! Traits defined here are implemented by the infrastructure layer and
//! consumed by the application services, keeping business logic independent
//! of the concrete store client.

pub mod link;
pub mod store;

pub use link::{Link, LinkStats};
pub use store::{KeyValueStore, StoreError};
