//! Factory port for constructing concrete server profiles.

use crate::server_profile::domain::{ProfileName, ProfileOrigin, ServerProfile};
use std::sync::Arc;

/// Builds the concrete profile behind the [`ServerProfile`] interface.
///
/// The registry calls the factory after resolving a unique name and without
/// holding its lock. If another caller claims the name in the meantime the
/// registry discards the built profile and asks again with a fresh name.
pub trait ProfileFactory: Send + Sync {
    /// Creates a profile carrying `name` and `origin`.
    fn create(&self, name: ProfileName, origin: ProfileOrigin) -> Arc<dyn ServerProfile>;
}
