//! In-memory adapter implementations.
//!
//! These adapters keep state in process memory and are suitable for tests
//! and for embedding the registry without a persistence layer.

mod store;

pub use store::InMemoryProfileStore;
