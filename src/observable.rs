//! Current-value cell with change notification.
//!
//! An [`Observable`] always holds a value that can be read synchronously.
//! Subscribers registered through [`Observable::subscribe`] receive the
//! current value right away and then every value passed to
//! [`Observable::set`] until their [`Subscription`] is unsubscribed or
//! dropped. Delivery is synchronous and in subscription order; nothing is
//! queued or replayed. A subscription dropped by another subscriber during a
//! notification pass does not receive the rest of that pass.

use parking_lot::Mutex;
use std::sync::{Arc, Weak};

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
}

impl<T> Inner<T> {
    fn snapshot(&self) -> Vec<(u64, Callback<T>)> {
        self.subscribers
            .iter()
            .map(|(id, callback)| (*id, Arc::clone(callback)))
            .collect()
    }
}

/// Observable value cell scoped to one owner.
pub struct Observable<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T: Clone + Send + 'static> Observable<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value: initial,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Latest value.
    pub fn get(&self) -> T {
        self.inner.lock().value.clone()
    }

    /// Store `value` and notify every active subscriber before returning.
    pub fn set(&self, value: T) {
        let subscribers = {
            let mut inner = self.inner.lock();
            inner.value = value.clone();
            inner.snapshot()
        };
        self.notify(subscribers, &value);
    }

    /// Read-modify-write under a single lock, so concurrent updates are
    /// never lost. Returns the stored value.
    ///
    /// `f` runs with the lock held and must not touch this cell.
    pub fn update<F>(&self, f: F) -> T
    where
        F: FnOnce(&T) -> T,
    {
        let (next, subscribers) = {
            let mut inner = self.inner.lock();
            let next = f(&inner.value);
            inner.value = next.clone();
            (next, inner.snapshot())
        };
        self.notify(subscribers, &next);
        next
    }

    // Called without the lock: subscribers may read the cell or drop other
    // subscriptions. A subscription dropped earlier in this pass is skipped.
    fn notify(&self, subscribers: Vec<(u64, Callback<T>)>, value: &T) {
        for (id, callback) in subscribers {
            if self.is_subscribed(id) {
                callback(value);
            }
        }
    }

    fn is_subscribed(&self, id: u64) -> bool {
        self.inner
            .lock()
            .subscribers
            .iter()
            .any(|(subscriber, _)| *subscriber == id)
    }

    /// Register `callback`; it is invoked immediately with the current value.
    pub fn subscribe<F>(&self, callback: F) -> Subscription<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let callback: Callback<T> = Arc::new(callback);
        let (id, current) = {
            let mut inner = self.inner.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Arc::clone(&callback)));
            (id, inner.value.clone())
        };

        callback(&current);

        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }
}

/// Handle returned by [`Observable::subscribe`].
///
/// Dropping the handle unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription<T> {
    id: u64,
    inner: Weak<Mutex<Inner<T>>>,
}

impl<T> Subscription<T> {
    pub fn unsubscribe(self) {
        // Removal happens in Drop.
    }

    fn detach(&self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsubscribe_after_owner_dropped_is_noop() {
        let observable = Observable::new(1);
        let subscription = observable.subscribe(|_| {});
        drop(observable);
        subscription.unsubscribe();
    }

    #[test]
    fn subscriber_can_read_cell_during_notification() {
        let observable = Arc::new(Observable::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let reader = Arc::clone(&observable);
        let sink = Arc::clone(&seen);
        // The closure holding `reader` keeps the cell alive; break the cycle
        // by dropping the subscription before the end of the test.
        let subscription = observable.subscribe(move |_| sink.lock().push(reader.get()));
        observable.set(5);
        drop(subscription);

        assert_eq!(*seen.lock(), vec![0, 5]);
    }
}
