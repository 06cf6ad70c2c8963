//! Where a server profile came from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source of a registered profile.
///
/// Saved profiles belong to the user and are written back to the profile
/// store. Discovered profiles mirror network announcements and live only as
/// long as the announcement does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileOrigin {
    /// Created by the user or restored from the profile store.
    #[default]
    Saved,
    /// Added by a discovery source.
    Discovered,
}

impl ProfileOrigin {
    /// Returns the origin as a lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Saved => "saved",
            Self::Discovered => "discovered",
        }
    }

    /// Returns whether profiles of this origin are written to the store.
    #[must_use]
    pub const fn is_persistent(self) -> bool {
        matches!(self, Self::Saved)
    }
}

impl fmt::Display for ProfileOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
