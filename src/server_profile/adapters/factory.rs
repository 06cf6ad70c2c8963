//! Default profile factory producing [`StoredServerProfile`] values.

use crate::server_profile::{
    domain::{
        ConnectionOptions, ConnectionTarget, ProfileName, ProfileOrigin, ServerProfile,
        StoredServerProfile,
    },
    ports::ProfileFactory,
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Initial settings applied to newly created profiles.
///
/// Missing fields deserialize to their defaults, so applications can load a
/// partial section from their own configuration source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDefaults {
    /// Target assigned to new profiles.
    pub target: ConnectionTarget,
    /// Options assigned to new profiles.
    pub options: ConnectionOptions,
}

/// Factory creating in-memory [`StoredServerProfile`] instances.
#[derive(Debug)]
pub struct StoredProfileFactory<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
    defaults: ProfileDefaults,
}

impl<C> StoredProfileFactory<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a factory using [`ProfileDefaults::default`].
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self::with_defaults(clock, ProfileDefaults::default())
    }

    /// Creates a factory applying `defaults` to every new profile.
    #[must_use]
    pub const fn with_defaults(clock: Arc<C>, defaults: ProfileDefaults) -> Self {
        Self { clock, defaults }
    }
}

impl<C> ProfileFactory for StoredProfileFactory<C>
where
    C: Clock + Send + Sync,
{
    fn create(&self, name: ProfileName, origin: ProfileOrigin) -> Arc<dyn ServerProfile> {
        Arc::new(StoredServerProfile::new(
            name,
            self.defaults.target.clone(),
            self.defaults.options,
            origin,
            &*self.clock,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockable::DefaultClock;

    #[test]
    fn created_profiles_use_configured_defaults() {
        let defaults = ProfileDefaults {
            target: ConnectionTarget::parse("desk.example.org:1").expect("valid target"),
            options: ConnectionOptions::new().with_shared(true),
        };
        let factory = StoredProfileFactory::with_defaults(Arc::new(DefaultClock), defaults);
        let name = ProfileName::new("Desk").expect("valid name");

        let profile = factory.create(name, ProfileOrigin::Discovered);

        assert_eq!(profile.name().as_str(), "Desk");
        assert_eq!(profile.origin(), ProfileOrigin::Discovered);
        assert_eq!(profile.target().port(), 5901);
        assert!(profile.options().shared());
    }

    #[test]
    fn partial_defaults_deserialize_with_fallbacks() {
        let defaults: ProfileDefaults =
            serde_json::from_str(r#"{"options":{"view_only":true}}"#).expect("valid defaults");

        assert_eq!(defaults.target, ConnectionTarget::default());
        assert!(defaults.options.view_only());
        assert!(!defaults.options.shared());
    }
}
