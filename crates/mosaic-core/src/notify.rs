//! Change-notification primitives shared by the registries.
//!
//! [`Listeners`] is a cloneable handle over a shared callback list.
//! Emission snapshots the list first, so a callback may subscribe,
//! cancel, or mutate a registry re-entrantly without corrupting the
//! iteration in progress.

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use tokio::task::JoinHandle;

type Callback = Arc<dyn Fn() + Send + Sync>;
type ListenerId = u64;

struct ListenerSet {
    callbacks: RwLock<Vec<(ListenerId, Callback)>>,
    next_id: AtomicU64,
}

/// Cloneable handle to a set of change listeners.
#[derive(Clone)]
pub struct Listeners {
    inner: Arc<ListenerSet>,
}

impl Listeners {
    /// Create an empty listener set.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ListenerSet {
                callbacks: RwLock::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Subscribe a callback. Cancel via the returned [`Subscription`].
    pub fn listen(&self, callback: impl Fn() + Send + Sync + 'static) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.callbacks.write().push((id, Arc::new(callback)));
        Subscription {
            set: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Invoke every subscribed callback.
    ///
    /// The list is snapshotted and the lock released before any callback
    /// runs, so callbacks may subscribe or cancel freely.
    pub fn emit(&self) {
        let snapshot: Vec<Callback> = self
            .inner
            .callbacks
            .read()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for callback in snapshot {
            callback();
        }
    }

    /// Number of active subscriptions.
    pub fn len(&self) -> usize {
        self.inner.callbacks.read().len()
    }

    /// Whether no subscriptions are active.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Listeners {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for cancelling a subscription made via [`Listeners::listen`].
///
/// Dropping the handle without calling [`cancel`](Self::cancel) leaves
/// the subscription active.
pub struct Subscription {
    set: Weak<ListenerSet>,
    id: ListenerId,
}

impl Subscription {
    /// Remove the subscribed callback.
    pub fn cancel(self) {
        if let Some(set) = self.set.upgrade() {
            set.callbacks.write().retain(|(id, _)| *id != self.id);
        }
    }
}

/// Timer-coalesced trigger.
///
/// Each [`schedule`](Self::schedule) re-arms a timer task; when the
/// window elapses without another call, the listeners are emitted once.
/// A burst of schedules within one window therefore produces a single
/// notification. Must be called within a Tokio runtime context.
pub struct Debouncer {
    window: Duration,
    listeners: Listeners,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    /// Create a debouncer emitting to the given listeners.
    pub fn new(listeners: Listeners, window: Duration) -> Self {
        Self {
            window,
            listeners,
            timer: Mutex::new(None),
        }
    }

    /// Arm (or re-arm) the trigger.
    pub fn schedule(&self) {
        let listeners = self.listeners.clone();
        let window = self.window;

        let mut timer = self.timer.lock();
        if let Some(handle) = timer.take() {
            handle.abort();
        }
        *timer = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            listeners.emit();
        }));
    }

    /// The coalescing window.
    pub fn window(&self) -> Duration {
        self.window
    }
}
