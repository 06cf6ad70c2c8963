//! Shared test helpers for in-memory registry integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use mockable::DefaultClock;
use rstest::fixture;
use vnc_registry::server_profile::{
    DefaultServerRegistry,
    adapters::StoredProfileFactory,
    domain::{ConnectionTarget, ProfileOrigin, ServerProfile},
    services::ServerRegistry,
};

/// Provides a fresh registry for each test.
#[fixture]
pub fn registry() -> DefaultServerRegistry {
    ServerRegistry::new(Arc::new(StoredProfileFactory::new(Arc::new(DefaultClock))))
}

/// Counts change events published by a registry.
#[derive(Debug, Clone, Default)]
pub struct EventCounter(Arc<AtomicUsize>);

impl EventCounter {
    /// Subscribes a new counter to `registry`.
    #[must_use]
    pub fn attach(registry: &DefaultServerRegistry) -> Self {
        let counter = Self::default();
        let inner = Arc::clone(&counter.0);
        registry.subscribe(move |_| {
            inner.fetch_add(1, Ordering::SeqCst);
        });
        counter
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Minimal discovery source that mirrors network announcements into a
/// registry.
///
/// Announced services are remembered by the name the registry assigned, so
/// a withdrawal removes exactly the profile the announcement created.
#[derive(Debug)]
pub struct AnnouncementSource {
    registry: DefaultServerRegistry,
    announced: Mutex<Vec<Arc<dyn ServerProfile>>>,
}

impl AnnouncementSource {
    /// Creates a source feeding `registry`.
    #[must_use]
    pub fn new(registry: DefaultServerRegistry) -> Self {
        Self {
            registry,
            announced: Mutex::new(Vec::new()),
        }
    }

    /// Handles a service announcement, returning the registered profile.
    ///
    /// # Panics
    ///
    /// Panics when the announcement carries an invalid name or address.
    pub fn announce(&self, service_name: &str, address: &str) -> Arc<dyn ServerProfile> {
        let profile = self
            .registry
            .create_with_origin(service_name, ProfileOrigin::Discovered)
            .expect("announced service names are valid");
        profile.set_target(ConnectionTarget::parse(address).expect("announced address is valid"));
        self.announced
            .lock()
            .expect("announcement lock")
            .push(Arc::clone(&profile));
        profile
    }

    /// Handles a service withdrawal for the first matching announcement.
    ///
    /// # Panics
    ///
    /// Panics when the announcement lock is poisoned.
    pub fn withdraw(&self, service_name: &str) -> bool {
        let mut announced = self.announced.lock().expect("announcement lock");
        let Some(position) = announced
            .iter()
            .position(|profile| profile.name().as_str() == service_name)
        else {
            return false;
        };
        let profile = announced.remove(position);
        self.registry.remove(profile.as_ref())
    }
}
