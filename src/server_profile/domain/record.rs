//! Plain data snapshot of a server profile.

use super::{ConnectionOptions, ConnectionTarget, ProfileName};
use serde::{Deserialize, Serialize};

/// Parameter object exchanged with profile stores.
///
/// A record carries the user-visible state of a profile but not its runtime
/// identity: restoring a record creates a fresh profile with a new
/// [`super::ProfileId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Requested profile name.
    pub name: ProfileName,
    /// Connection target.
    #[serde(default)]
    pub target: ConnectionTarget,
    /// Connection options.
    #[serde(default)]
    pub options: ConnectionOptions,
}

impl ProfileRecord {
    /// Creates a record from its parts.
    #[must_use]
    pub const fn new(
        name: ProfileName,
        target: ConnectionTarget,
        options: ConnectionOptions,
    ) -> Self {
        Self {
            name,
            target,
            options,
        }
    }
}
