//! Synchronous publish/subscribe channel for registry change events.

use crate::server_profile::domain::RegistryEvent;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::trace;

/// Callback invoked for each published [`RegistryEvent`].
pub type ServerListListener = Arc<dyn Fn(RegistryEvent) + Send + Sync>;

/// Handle returned by [`ServerListNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscription-{}", self.0)
    }
}

/// Registered listeners for server list changes.
///
/// Listeners run on the publishing thread, in subscription order. Clones
/// share the same listener list.
#[derive(Clone, Default)]
pub struct ServerListNotifier {
    listeners: Arc<RwLock<Vec<(SubscriptionId, ServerListListener)>>>,
    next_id: Arc<AtomicU64>,
}

impl ServerListNotifier {
    /// Creates a notifier with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` and returns its subscription handle.
    pub fn subscribe(
        &self,
        listener: impl Fn(RegistryEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(subscription, _)| *subscription != id);
        listeners.len() != before
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Delivers `event` to every listener registered at the time of the call.
    ///
    /// The listener list is copied first, so listeners may subscribe or
    /// unsubscribe while being notified.
    pub fn publish(&self, event: RegistryEvent) {
        let listeners: Vec<ServerListListener> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        trace!(event = %event, listeners = listeners.len(), "publishing registry event");
        for listener in listeners {
            listener(event);
        }
    }
}

impl fmt::Debug for ServerListNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerListNotifier")
            .field("listeners", &self.listener_count())
            .finish_non_exhaustive()
    }
}
