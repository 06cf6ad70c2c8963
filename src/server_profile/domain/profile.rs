//! Capability interface for server profiles and its stored implementation.

use super::{
    ConnectionOptions, ConnectionTarget, ProfileId, ProfileName, ProfileOrigin, ProfileRecord,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::fmt;
use std::sync::{PoisonError, RwLock};

/// Capability interface through which every server profile is accessed.
///
/// Consumers never see the concrete profile type. The name is fixed when the
/// registry constructs the profile; the connection settings may be edited in
/// place through any shared handle.
pub trait ServerProfile: fmt::Debug + Send + Sync {
    /// Returns the identity of this profile instance.
    fn id(&self) -> ProfileId;

    /// Returns the unique profile name.
    fn name(&self) -> &ProfileName;

    /// Returns the creation timestamp.
    fn created_at(&self) -> DateTime<Utc>;

    /// Returns whether the profile was saved by the user or discovered.
    fn origin(&self) -> ProfileOrigin;

    /// Returns the current connection target.
    fn target(&self) -> ConnectionTarget;

    /// Replaces the connection target.
    fn set_target(&self, target: ConnectionTarget);

    /// Returns the current connection options.
    fn options(&self) -> ConnectionOptions;

    /// Replaces the connection options.
    fn set_options(&self, options: ConnectionOptions);

    /// Captures the user-visible state as a [`ProfileRecord`].
    fn to_record(&self) -> ProfileRecord {
        ProfileRecord::new(self.name().clone(), self.target(), self.options())
    }
}

#[derive(Debug, Clone)]
struct ProfileSettings {
    target: ConnectionTarget,
    options: ConnectionOptions,
}

/// Server profile kept in memory by the registry.
#[derive(Debug)]
pub struct StoredServerProfile {
    id: ProfileId,
    name: ProfileName,
    created_at: DateTime<Utc>,
    origin: ProfileOrigin,
    settings: RwLock<ProfileSettings>,
}

impl StoredServerProfile {
    /// Creates a profile with the given name and initial settings.
    #[must_use]
    pub fn new(
        name: ProfileName,
        target: ConnectionTarget,
        options: ConnectionOptions,
        origin: ProfileOrigin,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: ProfileId::new(),
            name,
            created_at: clock.utc(),
            origin,
            settings: RwLock::new(ProfileSettings { target, options }),
        }
    }

    fn read_settings(&self) -> ProfileSettings {
        self.settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn update_settings(&self, update: impl FnOnce(&mut ProfileSettings)) {
        let mut settings = self
            .settings
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        update(&mut *settings);
    }
}

impl ServerProfile for StoredServerProfile {
    fn id(&self) -> ProfileId {
        self.id
    }

    fn name(&self) -> &ProfileName {
        &self.name
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn origin(&self) -> ProfileOrigin {
        self.origin
    }

    fn target(&self) -> ConnectionTarget {
        self.read_settings().target
    }

    fn set_target(&self, target: ConnectionTarget) {
        self.update_settings(|settings| settings.target = target);
    }

    fn options(&self) -> ConnectionOptions {
        self.read_settings().options
    }

    fn set_options(&self, options: ConnectionOptions) {
        self.update_settings(|settings| settings.options = options);
    }
}
