//! Store port for loading and saving profile records.

use crate::server_profile::domain::ProfileRecord;
use std::sync::Arc;
use thiserror::Error;

/// Result type for profile store operations.
pub type ProfileStoreResult<T> = Result<T, ProfileStoreError>;

/// Persistence contract for server profile records.
///
/// The on-disk format, if any, belongs to the implementation.
pub trait ProfileStore: Send + Sync {
    /// Loads every stored record in saved order.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileStoreError::Persistence`] when the backing store
    /// cannot be read.
    fn load(&self) -> ProfileStoreResult<Vec<ProfileRecord>>;

    /// Replaces the stored records with `records`.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileStoreError::Persistence`] when the write fails.
    fn save(&self, records: &[ProfileRecord]) -> ProfileStoreResult<()>;
}

/// Errors returned by profile store implementations.
#[derive(Debug, Clone, Error)]
pub enum ProfileStoreError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProfileStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
