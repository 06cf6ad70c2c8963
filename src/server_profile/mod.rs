//! Server profile registry for remote desktop connections.
//!
//! This module keeps the authoritative, in-process collection of named
//! server profiles: saved connection targets as well as entries announced by
//! discovery sources. Every profile carries a unique, case-sensitive name
//! that the registry resolves at creation time. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

mod shared;

pub use shared::{DefaultServerRegistry, shared_registry};

#[cfg(test)]
mod tests;
