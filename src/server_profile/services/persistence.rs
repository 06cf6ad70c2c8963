//! Bridges the server registry and a [`ProfileStore`].
//!
//! Saved profiles are loaded at startup through the registry's own create
//! operation, so restored names are disambiguated against entries that are
//! already registered (for example, servers announced by discovery). Only
//! profiles whose origin is [`ProfileOrigin::Saved`] are written back.

use crate::server_profile::{
    domain::{ProfileOrigin, ProfileRecord, ServerProfile},
    ports::{ProfileFactory, ProfileStore, ProfileStoreError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use super::ServerRegistry;

/// Service-level errors for profile persistence.
#[derive(Debug, Error)]
pub enum ProfilePersistenceError {
    /// The store failed.
    #[error(transparent)]
    Store(#[from] ProfileStoreError),
}

/// Result type for profile persistence operations.
pub type ProfilePersistenceResult<T> = Result<T, ProfilePersistenceError>;

/// Loads profiles into and saves profiles out of a [`ServerRegistry`].
pub struct ProfilePersistenceService<S, F>
where
    S: ProfileStore,
    F: ProfileFactory,
{
    store: Arc<S>,
    registry: ServerRegistry<F>,
}

impl<S, F> ProfilePersistenceService<S, F>
where
    S: ProfileStore,
    F: ProfileFactory,
{
    /// Creates a persistence service for `registry` backed by `store`.
    #[must_use]
    pub const fn new(store: Arc<S>, registry: ServerRegistry<F>) -> Self {
        Self { store, registry }
    }

    /// Creates one saved registry profile per stored record.
    ///
    /// Each record's target and options are applied after creation, so
    /// change listeners fire before the settings are in place. Returns the
    /// restored profiles in stored order.
    ///
    /// # Errors
    ///
    /// Returns [`ProfilePersistenceError::Store`] when loading fails. Records
    /// restored before a failure stay registered.
    #[tracing::instrument(skip(self))]
    pub fn restore(&self) -> ProfilePersistenceResult<Vec<Arc<dyn ServerProfile>>> {
        let records = self.store.load()?;
        let mut restored = Vec::with_capacity(records.len());

        for record in records {
            let ProfileRecord {
                name,
                target,
                options,
            } = record;
            let profile = self.registry.create_named(&name, ProfileOrigin::Saved);
            profile.set_target(target);
            profile.set_options(options);
            restored.push(profile);
        }

        info!(count = restored.len(), "restored server profiles");
        Ok(restored)
    }

    /// Writes the saved profiles to the store in insertion order.
    ///
    /// Discovered profiles are skipped. Returns the number of records
    /// written.
    ///
    /// # Errors
    ///
    /// Returns [`ProfilePersistenceError::Store`] when saving fails.
    #[tracing::instrument(skip(self))]
    pub fn persist(&self) -> ProfilePersistenceResult<usize> {
        let records: Vec<ProfileRecord> = self
            .registry
            .enumerate()
            .iter()
            .filter(|profile| profile.origin().is_persistent())
            .map(|profile| profile.to_record())
            .collect();

        self.store.save(&records)?;
        info!(count = records.len(), "persisted server profiles");
        Ok(records.len())
    }
}
