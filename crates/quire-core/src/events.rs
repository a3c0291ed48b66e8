//! Observer registration with explicit cancellation handles
//!
//! An [`Emitter`] owns a list of listeners. Registering a listener returns a
//! [`Subscription`]; disposing (or dropping) the subscription removes the
//! listener. Listeners are invoked outside the registry lock, so a listener
//! may subscribe, unsubscribe, or fire re-entrantly.

use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, Weak};
use tracing::trace;

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Registry<T> {
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

impl<T> Registry<T> {
    fn contains(&self, id: u64) -> bool {
        self.listeners.iter().any(|(existing, _)| *existing == id)
    }
}

/// Fan-out notification source
pub struct Emitter<T> {
    registry: Arc<Mutex<Registry<T>>>,
}

impl<T: 'static> Emitter<T> {
    /// Create an emitter with no listeners
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                next_id: 1,
                listeners: Vec::new(),
            })),
        }
    }

    /// Register a listener; it stays registered until the returned handle is disposed.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = {
            let mut registry = self.registry.lock();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.listeners.push((id, Arc::new(listener)));
            id
        };

        let weak: Weak<Mutex<Registry<T>>> = Arc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = weak.upgrade() {
                registry.lock().listeners.retain(|(existing, _)| *existing != id);
            }
        })
    }

    /// Deliver `event` to every listener registered at the time of the call.
    ///
    /// A listener disposed by an earlier listener in the same round is skipped.
    pub fn fire(&self, event: &T) {
        let snapshot: Vec<(u64, Listener<T>)> = self
            .registry
            .lock()
            .listeners
            .iter()
            .map(|(id, listener)| (*id, Arc::clone(listener)))
            .collect();

        trace!(listeners = snapshot.len(), "firing event");
        for (id, listener) in snapshot {
            if self.registry.lock().contains(id) {
                listener(event);
            }
        }
    }

    /// Number of live listeners
    pub fn listener_count(&self) -> usize {
        self.registry.lock().listeners.len()
    }

    /// Drop every listener; outstanding handles become no-ops.
    pub fn clear(&self) {
        self.registry.lock().listeners.clear();
    }
}

impl<T: 'static> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Emitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("listeners", &self.registry.lock().listeners.len())
            .finish()
    }
}

/// Cancellation handle for a registered listener
///
/// Disposal is idempotent. Dropping the handle disposes it.
#[must_use = "dropping a Subscription immediately unregisters the listener"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Wrap a release action
    pub fn new<F>(unsubscribe: F) -> Self
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// A handle that releases nothing
    pub fn empty() -> Self {
        Self { unsubscribe: None }
    }

    /// Release the listener. Later calls do nothing.
    pub fn dispose(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }

    /// Whether the handle still holds a registration
    pub fn is_active(&self) -> bool {
        self.unsubscribe.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
