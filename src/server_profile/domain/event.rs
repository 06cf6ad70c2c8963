//! Change events broadcast by the server registry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Event published to registry subscribers.
///
/// Events carry no payload; subscribers re-read the registry to learn what
/// changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryEvent {
    /// A profile was created or removed.
    ServerListChanged,
}

impl RegistryEvent {
    /// Returns the well-known event name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ServerListChanged => "server_list_changed",
        }
    }
}

impl fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
