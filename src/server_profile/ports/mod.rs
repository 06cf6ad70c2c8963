//! Port contracts for the server profile registry.
//!
//! Ports define infrastructure-agnostic interfaces used by the registry and
//! its collaborating services.

pub mod factory;
pub mod store;

pub use factory::ProfileFactory;
pub use store::{ProfileStore, ProfileStoreError, ProfileStoreResult};
