//! Service layer for the server profile registry.
//!
//! Provides [`ServerRegistry`], the authoritative collection of server
//! profiles keyed by unique name. Profiles enter the registry only through
//! the create operations and leave it only through
//! [`ServerRegistry::remove`] or [`ServerRegistry::remove_by_name`]; each
//! such change is announced to subscribers as
//! [`RegistryEvent::ServerListChanged`].

use crate::server_profile::{
    domain::{
        ProfileDomainError, ProfileId, ProfileName, ProfileOrigin, RegistryEvent, ServerProfile,
    },
    ports::ProfileFactory,
};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

use super::{ServerListNotifier, SubscriptionId};

/// Point-in-time copy of the registry contents in insertion order.
///
/// A snapshot can be iterated any number of times and is unaffected by
/// later registry changes.
#[derive(Debug, Clone, Default)]
pub struct ProfileSnapshot {
    profiles: Vec<Arc<dyn ServerProfile>>,
}

impl ProfileSnapshot {
    /// Returns an iterator over the captured profiles.
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<dyn ServerProfile>> {
        self.profiles.iter()
    }

    /// Returns the number of captured profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns whether the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Returns the profile at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Arc<dyn ServerProfile>> {
        self.profiles.get(index)
    }

    /// Returns the captured profile names in order.
    pub fn names(&self) -> impl Iterator<Item = &ProfileName> {
        self.profiles.iter().map(|profile| profile.name())
    }
}

impl IntoIterator for ProfileSnapshot {
    type Item = Arc<dyn ServerProfile>;
    type IntoIter = std::vec::IntoIter<Arc<dyn ServerProfile>>;

    fn into_iter(self) -> Self::IntoIter {
        self.profiles.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProfileSnapshot {
    type Item = &'a Arc<dyn ServerProfile>;
    type IntoIter = std::slice::Iter<'a, Arc<dyn ServerProfile>>;

    fn into_iter(self) -> Self::IntoIter {
        self.profiles.iter()
    }
}

#[derive(Debug, Default)]
struct RegistryState {
    /// Profiles keyed by insertion sequence number.
    entries: BTreeMap<u64, Arc<dyn ServerProfile>>,
    name_index: HashMap<ProfileName, u64>,
    next_sequence: u64,
}

impl RegistryState {
    /// Returns `requested`, or `requested_N` with the smallest free `N >= 1`.
    fn resolve_unique_name(&self, requested: &ProfileName) -> ProfileName {
        if !self.name_index.contains_key(requested) {
            return requested.clone();
        }

        let mut suffix = 1_u64;
        loop {
            let candidate = requested.with_suffix(suffix);
            if !self.name_index.contains_key(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }

    fn insert(&mut self, name: ProfileName, profile: Arc<dyn ServerProfile>) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.name_index.insert(name, sequence);
        self.entries.insert(sequence, profile);
    }

    fn get_by_name(&self, name: &str) -> Option<&Arc<dyn ServerProfile>> {
        self.name_index
            .get(name)
            .and_then(|sequence| self.entries.get(sequence))
    }

    fn take_by_name(&mut self, name: &str) -> Option<Arc<dyn ServerProfile>> {
        let sequence = self.name_index.remove(name)?;
        self.entries.remove(&sequence)
    }
}

/// Authoritative collection of server profiles keyed by unique name.
///
/// Clones are handles onto the same registry. Every read and removal runs
/// under a single lock acquisition; subscribers are notified after the lock has been
/// released, so they may read the registry from their callback.
pub struct ServerRegistry<F>
where
    F: ProfileFactory,
{
    factory: Arc<F>,
    state: Arc<RwLock<RegistryState>>,
    notifier: ServerListNotifier,
}

impl<F> ServerRegistry<F>
where
    F: ProfileFactory,
{
    /// Creates an empty registry constructing profiles with `factory`.
    #[must_use]
    pub fn new(factory: Arc<F>) -> Self {
        Self {
            factory,
            state: Arc::new(RwLock::new(RegistryState::default())),
            notifier: ServerListNotifier::new(),
        }
    }

    /// Creates a saved profile named `name`, or `name_N` if `name` is taken.
    ///
    /// `N` is the smallest positive integer producing an unused name. The
    /// name is matched case-sensitively and stored verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileDomainError::EmptyProfileName`] when `name` is empty
    /// or whitespace-only, or [`ProfileDomainError::InvalidProfileName`]
    /// when it contains control characters.
    pub fn create(&self, name: &str) -> Result<Arc<dyn ServerProfile>, ProfileDomainError> {
        self.create_with_origin(name, ProfileOrigin::Saved)
    }

    /// Creates a profile like [`Self::create`], tagged with `origin`.
    ///
    /// # Errors
    ///
    /// Returns the same name validation errors as [`Self::create`].
    pub fn create_with_origin(
        &self,
        name: &str,
        origin: ProfileOrigin,
    ) -> Result<Arc<dyn ServerProfile>, ProfileDomainError> {
        let requested = ProfileName::new(name)?;
        Ok(self.create_named(&requested, origin))
    }

    /// Creates a profile from an already validated name.
    ///
    /// The name is resolved under the read lock and the profile is built
    /// without holding any lock, so factories may call back into the
    /// registry. Insertion re-checks the name under the write lock and
    /// retries with a fresh suffix when a concurrent create claimed it.
    pub fn create_named(
        &self,
        requested: &ProfileName,
        origin: ProfileOrigin,
    ) -> Arc<dyn ServerProfile> {
        let mut unique_name = self.read_state().resolve_unique_name(requested);
        let profile = loop {
            let candidate = self.factory.create(unique_name.clone(), origin);
            debug_assert_eq!(candidate.name(), &unique_name);

            let mut state = self.write_state();
            let resolved = state.resolve_unique_name(requested);
            if resolved == unique_name {
                state.insert(unique_name, Arc::clone(&candidate));
                break candidate;
            }
            debug!(profile = %unique_name, "profile name claimed concurrently, retrying");
            unique_name = resolved;
        };

        if profile.name() != requested {
            debug!(
                requested = %requested,
                profile = %profile.name(),
                "profile name already in use, appended suffix"
            );
        }
        info!(
            profile = %profile.name(),
            id = %profile.id(),
            origin = %profile.origin(),
            "created server profile"
        );
        self.notifier.publish(RegistryEvent::ServerListChanged);
        profile
    }

    /// Removes `profile` if this exact instance is registered.
    ///
    /// The entry must match both by name and by identity, so a stale handle
    /// never removes a newer profile that reuses its name. Returns `false`
    /// and publishes nothing when there was nothing to remove.
    pub fn remove(&self, profile: &dyn ServerProfile) -> bool {
        let removed = {
            let mut state = self.write_state();
            let is_member = state
                .get_by_name(profile.name().as_str())
                .is_some_and(|stored| stored.id() == profile.id());
            is_member && state.take_by_name(profile.name().as_str()).is_some()
        };

        if removed {
            info!(profile = %profile.name(), id = %profile.id(), "removed server profile");
            self.notifier.publish(RegistryEvent::ServerListChanged);
        } else {
            debug!(profile = %profile.name(), id = %profile.id(), "profile not registered, nothing removed");
        }
        removed
    }

    /// Removes the profile registered under `name`, returning it.
    pub fn remove_by_name(&self, name: &str) -> Option<Arc<dyn ServerProfile>> {
        let removed = self.write_state().take_by_name(name);

        match &removed {
            Some(profile) => {
                info!(profile = %profile.name(), id = %profile.id(), "removed server profile");
                self.notifier.publish(RegistryEvent::ServerListChanged);
            }
            None => debug!(profile = name, "profile not registered, nothing removed"),
        }
        removed
    }

    /// Finds a profile by exact, case-sensitive name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<Arc<dyn ServerProfile>> {
        self.read_state().get_by_name(name).cloned()
    }

    /// Finds the profile at zero-based `index` in insertion order.
    #[must_use]
    pub fn find_at_index(&self, index: usize) -> Option<Arc<dyn ServerProfile>> {
        self.read_state().entries.values().nth(index).cloned()
    }

    /// Finds a profile by identity.
    #[must_use]
    pub fn find_by_id(&self, id: ProfileId) -> Option<Arc<dyn ServerProfile>> {
        self.read_state()
            .entries
            .values()
            .find(|profile| profile.id() == id)
            .cloned()
    }

    /// Returns whether a profile is registered under `name`.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.read_state().name_index.contains_key(name)
    }

    /// Captures the registered profiles in insertion order.
    #[must_use]
    pub fn enumerate(&self) -> ProfileSnapshot {
        let profiles = self.read_state().entries.values().cloned().collect();
        ProfileSnapshot { profiles }
    }

    /// Returns the number of registered profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read_state().entries.len()
    }

    /// Returns whether no profiles are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read_state().entries.is_empty()
    }

    /// Registers a listener for [`RegistryEvent::ServerListChanged`].
    pub fn subscribe(
        &self,
        listener: impl Fn(RegistryEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.notifier.subscribe(listener)
    }

    /// Removes a listener. Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    fn read_state(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<F> Clone for ServerRegistry<F>
where
    F: ProfileFactory,
{
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
            state: Arc::clone(&self.state),
            notifier: self.notifier.clone(),
        }
    }
}

impl<F> fmt::Debug for ServerRegistry<F>
where
    F: ProfileFactory,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerRegistry")
            .field("profiles", &self.len())
            .field("notifier", &self.notifier)
            .finish_non_exhaustive()
    }
}
