//! Validated profile name type.

use super::ProfileDomainError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Case-sensitive, non-empty profile name.
///
/// Names are stored exactly as given: no trimming and no case folding, so a
/// lookup must use the same spelling the profile was created with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProfileName(String);

impl ProfileName {
    /// Creates a validated profile name.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileDomainError::EmptyProfileName`] when the value is
    /// empty or whitespace-only, or [`ProfileDomainError::InvalidProfileName`]
    /// when it contains control characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ProfileDomainError> {
        let raw = value.into();

        if raw.trim().is_empty() {
            return Err(ProfileDomainError::EmptyProfileName);
        }

        if raw.chars().any(char::is_control) {
            return Err(ProfileDomainError::InvalidProfileName(raw));
        }

        Ok(Self(raw))
    }

    /// Returns this name with `_{suffix}` appended.
    #[must_use]
    pub fn with_suffix(&self, suffix: u64) -> Self {
        Self(format!("{}_{suffix}", self.0))
    }

    /// Returns the profile name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProfileName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for ProfileName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ProfileName {
    type Error = ProfileDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProfileName> for String {
    fn from(name: ProfileName) -> Self {
        name.0
    }
}
