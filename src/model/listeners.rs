//! Identity-keyed listener registry shared by data sources and views

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// A set of listeners keyed by the identity of their `Arc`
///
/// Registered listeners are held strongly until they are unregistered, so a
/// listener handed over by value keeps receiving events. A presenter and its
/// collaborator reference each other while attached; detach to release both.
pub struct ListenerSet<L: ?Sized> {
    entries: RwLock<Vec<Arc<L>>>,
}

impl<L: ?Sized> ListenerSet<L> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Register a listener. Returns `false` if it was already registered.
    pub fn register(&self, listener: Arc<L>) -> bool {
        let mut entries = self.entries.write();
        if entries.iter().any(|entry| same_listener(entry, &listener)) {
            return false;
        }

        entries.push(listener);
        true
    }

    /// Unregister a listener. Returns `false` if it was not registered.
    pub fn unregister(&self, listener: &Arc<L>) -> bool {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|entry| !same_listener(entry, listener));
        entries.len() != before
    }

    pub fn contains(&self, listener: &Arc<L>) -> bool {
        self.entries
            .read()
            .iter()
            .any(|entry| same_listener(entry, listener))
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Every registered listener, in registration order.
    ///
    /// Notify through the snapshot rather than while holding the registry so
    /// listeners may (un)register from inside a callback.
    pub fn snapshot(&self) -> Vec<Arc<L>> {
        self.entries.read().clone()
    }
}

impl<L: ?Sized> Default for ListenerSet<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ?Sized> fmt::Debug for ListenerSet<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSet").field("len", &self.len()).finish()
    }
}

fn same_listener<L: ?Sized>(entry: &Arc<L>, listener: &Arc<L>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(entry), Arc::as_ptr(listener))
}
