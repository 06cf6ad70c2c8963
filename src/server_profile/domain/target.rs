//! Connection target value object.

use super::ProfileDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// TCP port of VNC display `:0`.
pub const DEFAULT_VNC_PORT: u16 = 5900;

/// Display numbers below this bound are written in `host:N` form.
const SHORT_DISPLAY_LIMIT: u16 = 100;

/// Host and TCP port a profile connects to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionTarget {
    host: String,
    port: u16,
}

impl ConnectionTarget {
    /// Creates a target from a host and explicit TCP port.
    ///
    /// The host is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileDomainError::EmptyHost`] when the host is blank or
    /// [`ProfileDomainError::InvalidPort`] when `port` is zero.
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self, ProfileDomainError> {
        let normalized_host = host.into().trim().to_owned();
        if normalized_host.is_empty() {
            return Err(ProfileDomainError::EmptyHost);
        }
        if port == 0 {
            return Err(ProfileDomainError::InvalidPort);
        }

        Ok(Self {
            host: normalized_host,
            port,
        })
    }

    /// Creates a target from a host and VNC display number.
    ///
    /// Display `N` listens on port `5900 + N`.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileDomainError::DisplayOutOfRange`] when the resulting
    /// port exceeds 65535, or the errors of [`ConnectionTarget::new`].
    pub fn from_display(host: impl Into<String>, display: u32) -> Result<Self, ProfileDomainError> {
        let port = u32::from(DEFAULT_VNC_PORT)
            .checked_add(display)
            .and_then(|value| u16::try_from(value).ok())
            .ok_or(ProfileDomainError::DisplayOutOfRange(display))?;
        Self::new(host, port)
    }

    /// Parses `host`, `host:display` or `host::port`.
    ///
    /// IPv6 literals must be bracketed, e.g. `[::1]:2`.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileDomainError::InvalidTarget`] for malformed input and
    /// the errors of [`ConnectionTarget::new`] and
    /// [`ConnectionTarget::from_display`] for out-of-range parts.
    pub fn parse(value: &str) -> Result<Self, ProfileDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ProfileDomainError::EmptyHost);
        }

        let invalid = || ProfileDomainError::InvalidTarget(trimmed.to_owned());
        let (host, suffix) = split_host(trimmed).ok_or_else(invalid)?;

        let Some(suffix) = suffix else {
            return Self::new(host, DEFAULT_VNC_PORT);
        };

        if let Some(raw_port) = suffix.strip_prefix(':') {
            let port = raw_port.parse::<u16>().map_err(|_| invalid())?;
            return Self::new(host, port);
        }

        let display = suffix.parse::<u32>().map_err(|_| invalid())?;
        Self::from_display(host, display)
    }

    /// Returns the host name or address.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the TCP port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the VNC display number when the port is at or above 5900.
    #[must_use]
    pub const fn display(&self) -> Option<u16> {
        self.port.checked_sub(DEFAULT_VNC_PORT)
    }
}

impl Default for ConnectionTarget {
    fn default() -> Self {
        Self {
            host: "localhost".to_owned(),
            port: DEFAULT_VNC_PORT,
        }
    }
}

impl fmt::Display for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]", self.host)?;
        } else {
            f.write_str(&self.host)?;
        }

        match self.display() {
            Some(display) if display < SHORT_DISPLAY_LIMIT => write!(f, ":{display}"),
            _ => write!(f, "::{}", self.port),
        }
    }
}

/// Splits `value` into the host and the text after the host separator.
fn split_host(value: &str) -> Option<(&str, Option<&str>)> {
    if let Some(bracketed) = value.strip_prefix('[') {
        let (host, rest) = bracketed.split_once(']')?;
        if rest.is_empty() {
            return Some((host, None));
        }
        return rest.strip_prefix(':').map(|suffix| (host, Some(suffix)));
    }

    Some(match value.split_once(':') {
        Some((host, suffix)) => (host, Some(suffix)),
        None => (value, None),
    })
}
