//! Adapter implementations for server profile ports.

pub mod memory;

mod factory;

pub use factory::{ProfileDefaults, StoredProfileFactory};
