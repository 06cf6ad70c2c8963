//! Error types for server profile domain validation.

use thiserror::Error;

/// Errors returned while constructing server profile domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProfileDomainError {
    /// The profile name is empty or consists only of whitespace.
    #[error("profile name must not be empty")]
    EmptyProfileName,

    /// The profile name contains control characters.
    #[error("profile name {0:?} contains control characters")]
    InvalidProfileName(String),

    /// The connection host is empty after trimming.
    #[error("connection host must not be empty")]
    EmptyHost,

    /// Port zero cannot be used as a connection target.
    #[error("connection port must be between 1 and 65535")]
    InvalidPort,

    /// The display number does not map onto a TCP port.
    #[error("display {0} is out of range")]
    DisplayOutOfRange(u32),

    /// A `host[:display|::port]` string could not be parsed.
    #[error("invalid connection target '{0}'")]
    InvalidTarget(String),
}
