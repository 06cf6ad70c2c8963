//! Registry of remote desktop server profiles.
//!
//! This crate keeps the in-process, authoritative list of known servers:
//! profiles saved by the user as well as servers announced by discovery.
//! Every profile has a unique, case-sensitive name resolved when it is
//! created, and every structural change is announced to subscribers.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Profile names, connection settings and the capability
//!   interface profiles are accessed through
//! - **Ports**: Abstract trait interfaces for profile construction and storage
//! - **Adapters**: Concrete implementations of ports
//! - **Services**: The registry itself and its persistence bridge
//!
//! # Modules
//!
//! - [`server_profile`]: Server profile registry

pub mod server_profile;
