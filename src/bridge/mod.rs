//! Counter exposed to a foreign UI runtime.
//!
//! A foreign runtime (SwiftUI, a C host) cannot observe an in-process
//! [`Observable`](crate::observable::Observable), so the bridge reports every
//! mutation through one callback slot instead. The slot holds at most one
//! callback: registering a new one replaces the old one. There is no fan-out
//! here; use [`CounterStream`](crate::stream::CounterStream) for multiple
//! subscribers.
//!
//! Typical host flow: read [`CounterBridge::get`] on load, register a
//! callback, then call `increment`/`decrement` on user action.

pub mod ffi;

use crate::counter::Counter;
use std::cell::Cell;

type CountChanged = Box<dyn FnMut(i32)>;

/// All state sits in `Cell`s so a host callback may call back into the
/// bridge (read, mutate, re-register) while it is running.
#[derive(Default)]
pub struct CounterBridge {
    counter: Cell<Counter>,
    on_count_changed: Cell<Option<CountChanged>>,
    // Bumped on every set/clear so a running callback is not restored over
    // a registration made from inside it.
    registration: Cell<u64>,
}

impl CounterBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) {
        let mut counter = self.counter.get();
        counter.increment();
        self.counter.set(counter);
        self.notify();
    }

    pub fn decrement(&self) {
        let mut counter = self.counter.get();
        counter.decrement();
        self.counter.set(counter);
        self.notify();
    }

    /// Current value. Never notifies.
    pub fn get(&self) -> i32 {
        self.counter.get().get()
    }

    /// Register the change callback, replacing any previous one.
    pub fn set_on_count_changed<F>(&self, callback: F)
    where
        F: FnMut(i32) + 'static,
    {
        if self.has_listener() {
            tracing::debug!("Replacing count-changed callback");
        }
        self.replace_callback(Some(Box::new(callback)));
    }

    pub fn clear_on_count_changed(&self) {
        self.replace_callback(None);
    }

    /// False while the callback itself is running.
    pub fn has_listener(&self) -> bool {
        let callback = self.on_count_changed.take();
        let present = callback.is_some();
        self.on_count_changed.set(callback);
        present
    }

    fn replace_callback(&self, callback: Option<CountChanged>) {
        self.registration.set(self.registration.get().wrapping_add(1));
        // The previous callback is dropped here, outside any call into it.
        drop(self.on_count_changed.replace(callback));
    }

    /// Mutations made from inside the callback update the count but are not
    /// reported back to that callback.
    fn notify(&self) {
        let count = self.get();
        let Some(mut callback) = self.on_count_changed.take() else {
            tracing::debug!(count, listener = false, "Bridge count changed");
            return;
        };
        tracing::debug!(count, listener = true, "Bridge count changed");

        let registration = self.registration.get();
        callback(count);
        if self.registration.get() == registration {
            self.on_count_changed.set(Some(callback));
        }
    }
}

impl std::fmt::Debug for CounterBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CounterBridge")
            .field("count", &self.get())
            .field("has_listener", &self.has_listener())
            .finish()
    }
}
