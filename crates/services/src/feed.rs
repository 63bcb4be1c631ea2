use std::fmt;
use std::sync::{Arc, Weak};

use nav_core::model::{NavigationStatus, RouteProgress};
use parking_lot::Mutex;

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Subscribers<T> {
    next_id: u64,
    entries: Vec<(u64, Callback<T>)>,
}

impl<T> Subscribers<T> {
    fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }

    fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }
}

/// Push channel for snapshots coming out of the navigation engine.
///
/// Every subscriber gets a [`Subscription`] handle; dropping the handle (or
/// calling [`Subscription::unsubscribe`]) detaches the callback, so a torn
/// down view never receives another update.
pub struct Feed<T> {
    name: &'static str,
    inner: Arc<Mutex<Subscribers<T>>>,
}

/// Route progress updates.
pub type ProgressFeed = Feed<RouteProgress>;
/// Current-road status updates.
pub type StatusFeed = Feed<NavigationStatus>;

impl<T: 'static> Feed<T> {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: Arc::new(Mutex::new(Subscribers {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Registers `callback` until the returned handle is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = {
            let mut subscribers = self.inner.lock();
            let id = subscribers.next_id;
            subscribers.next_id += 1;
            subscribers.entries.push((id, Arc::new(callback)));
            id
        };
        log::debug!("{} feed: subscriber {id} attached", self.name);

        let weak: Weak<Mutex<Subscribers<T>>> = Arc::downgrade(&self.inner);
        let name = self.name;
        Subscription {
            id,
            detach: Some(Box::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                if inner.lock().remove(id) {
                    log::debug!("{name} feed: subscriber {id} detached");
                }
            })),
        }
    }

    /// Delivers `value` to every current subscriber and returns how many were called.
    ///
    /// Callbacks run outside the lock, so they may subscribe or unsubscribe.
    /// A subscriber detached while the publish is under way is skipped.
    pub fn publish(&self, value: &T) -> usize {
        let callbacks: Vec<(u64, Callback<T>)> = self
            .inner
            .lock()
            .entries
            .iter()
            .map(|(id, callback)| (*id, Arc::clone(callback)))
            .collect();
        log::trace!("{} feed: publishing to {} subscribers", self.name, callbacks.len());

        let mut delivered = 0;
        for (id, callback) in &callbacks {
            if !self.inner.lock().contains(*id) {
                continue;
            }
            callback(value);
            delivered += 1;
        }
        delivered
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().entries.len()
    }
}

impl<T> Clone for Feed<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for Feed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Feed")
            .field("name", &self.name)
            .field("subscribers", &self.inner.lock().entries.len())
            .finish()
    }
}

/// Handle tying a feed callback to its owner's lifetime.
pub struct Subscription {
    id: u64,
    detach: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.detach.is_some()
    }

    /// Detaches the callback now.
    ///
    /// A publish running on another thread may already be inside this
    /// callback; it will not be called again once this returns.
    pub fn unsubscribe(mut self) {
        self.detach_now();
    }

    fn detach_now(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
