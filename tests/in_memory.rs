//! In-memory integration tests for the server profile registry.
//!
//! Tests are organized into modules by collaborator:
//! - `discovery_flow_tests`: announcement-driven creation and withdrawal
//! - `persistence_flow_tests`: restoring and saving through a profile store

mod in_memory {
    pub mod helpers;

    mod discovery_flow_tests;
    mod persistence_flow_tests;
}
