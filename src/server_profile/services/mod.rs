//! Application services for the server profile registry.

mod notifier;
mod persistence;
mod registry;

pub use notifier::{ServerListListener, ServerListNotifier, SubscriptionId};
pub use persistence::{
    ProfilePersistenceError, ProfilePersistenceResult, ProfilePersistenceService,
};
pub use registry::{ProfileSnapshot, ServerRegistry};
