//! Typed observable store shared by the session and notification state.
//!
//! Values are replaced wholesale or edited through `update`; every write notifies the
//! registered listeners with the new value. Listeners stay registered until
//! `unsubscribe` is called with the id returned from `subscribe`.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

pub struct Store<T> {
    value: Mutex<T>,
    listeners: Mutex<BTreeMap<SubscriptionId, Listener<T>>>,
    next_id: AtomicU64,
}

impl<T> Store<T>
where
    T: Clone + Send + 'static,
{
    pub fn new(initial: T) -> Self {
        Self {
            value: Mutex::new(initial),
            listeners: Mutex::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn get(&self) -> T {
        self.lock_value().clone()
    }

    /// Replace the whole value and notify listeners.
    pub fn replace(&self, value: T) {
        let snapshot = {
            let mut guard = self.lock_value();
            *guard = value;
            guard.clone()
        };
        self.notify(&snapshot);
    }

    /// Edit the value in place, returning whatever the closure produces.
    pub fn update<R>(&self, edit: impl FnOnce(&mut T) -> R) -> R {
        let (result, snapshot) = {
            let mut guard = self.lock_value();
            let result = edit(&mut guard);
            (result, guard.clone())
        };
        self.notify(&snapshot);
        result
    }

    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock_listeners().insert(id, Arc::new(listener));
        id
    }

    /// Returns `false` when the id was never registered or already removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.lock_listeners().remove(&id).is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock_listeners().len()
    }

    // Listeners run outside both locks so they may read the store again.
    fn notify(&self, snapshot: &T) {
        let listeners: Vec<Listener<T>> = self.lock_listeners().values().cloned().collect();
        for listener in listeners {
            listener(snapshot);
        }
    }

    fn lock_value(&self) -> MutexGuard<'_, T> {
        self.value.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_listeners(&self) -> MutexGuard<'_, BTreeMap<SubscriptionId, Listener<T>>> {
        self.listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T> Default for Store<T>
where
    T: Clone + Default + Send + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}
