//! Per-profile connection options.

use serde::{Deserialize, Serialize};

/// Session flags applied when connecting to a server profile.
///
/// All flags default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionOptions {
    shared: bool,
    view_only: bool,
    fullscreen: bool,
    remember_password: bool,
}

impl ConnectionOptions {
    /// Creates options with every flag cleared.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            shared: false,
            view_only: false,
            fullscreen: false,
            remember_password: false,
        }
    }

    /// Sets whether other clients may stay connected to the same desktop.
    #[must_use]
    pub const fn with_shared(mut self, shared: bool) -> Self {
        self.shared = shared;
        self
    }

    /// Sets whether keyboard and pointer input are suppressed.
    #[must_use]
    pub const fn with_view_only(mut self, view_only: bool) -> Self {
        self.view_only = view_only;
        self
    }

    /// Sets whether the session opens fullscreen.
    #[must_use]
    pub const fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    /// Sets whether the password should be kept by the credential store.
    #[must_use]
    pub const fn with_remember_password(mut self, remember_password: bool) -> Self {
        self.remember_password = remember_password;
        self
    }

    /// Returns whether the session is shared.
    #[must_use]
    pub const fn shared(&self) -> bool {
        self.shared
    }

    /// Returns whether the session is view-only.
    #[must_use]
    pub const fn view_only(&self) -> bool {
        self.view_only
    }

    /// Returns whether the session opens fullscreen.
    #[must_use]
    pub const fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Returns whether the password should be remembered.
    #[must_use]
    pub const fn remember_password(&self) -> bool {
        self.remember_password
    }
}
