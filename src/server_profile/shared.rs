//! Process-wide registry handle.

use super::{adapters::StoredProfileFactory, services::ServerRegistry};
use mockable::DefaultClock;
use std::sync::{Arc, OnceLock};

/// Registry backed by [`StoredProfileFactory`] and the system clock.
pub type DefaultServerRegistry = ServerRegistry<StoredProfileFactory<DefaultClock>>;

/// Returns a handle to the process-wide registry, creating it on first use.
///
/// Every returned handle shares the same profiles and subscribers.
/// Components that receive a registry from their owner do not need this.
pub fn shared_registry() -> DefaultServerRegistry {
    static SHARED: OnceLock<DefaultServerRegistry> = OnceLock::new();
    SHARED
        .get_or_init(|| {
            ServerRegistry::new(Arc::new(StoredProfileFactory::new(Arc::new(DefaultClock))))
        })
        .clone()
}
