//! In-memory profile store.

use std::sync::{Arc, RwLock};

use crate::server_profile::{
    domain::ProfileRecord,
    ports::{ProfileStore, ProfileStoreError, ProfileStoreResult},
};

/// Thread-safe in-memory profile store.
///
/// Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    records: Arc<RwLock<Vec<ProfileRecord>>>,
}

impl InMemoryProfileStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `records`.
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = ProfileRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records.into_iter().collect())),
        }
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn load(&self) -> ProfileStoreResult<Vec<ProfileRecord>> {
        let records = self.records.read().map_err(|err| {
            ProfileStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(records.clone())
    }

    fn save(&self, records: &[ProfileRecord]) -> ProfileStoreResult<()> {
        let mut stored = self.records.write().map_err(|err| {
            ProfileStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        *stored = records.to_vec();
        Ok(())
    }
}
