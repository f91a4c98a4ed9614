//! Reactive counter view-model.
//!
//! [`CounterStream`] keeps the count in an [`Observable`] so UI code can read
//! it synchronously and subscribe to changes. Mutations run through the
//! [`CounterReducer`] like every other intent in the UI layer.

use crate::observable::{Observable, Subscription};
use crate::ui::counter::{CounterIntent, CounterReducer, CounterViewState};
use crate::ui::mvi::Reducer;

pub struct CounterStream {
    count: Observable<i32>,
}

impl Default for CounterStream {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterStream {
    pub fn new() -> Self {
        Self {
            count: Observable::new(0),
        }
    }

    /// Apply `intent` and notify every current subscriber before returning.
    pub fn dispatch(&self, intent: CounterIntent) {
        let count = self.count.update(|&count| {
            CounterReducer::reduce(CounterViewState { count }, intent).count
        });
        tracing::debug!(?intent, count, "Counter stream updated");
    }

    pub fn increment(&self) {
        self.dispatch(CounterIntent::Increment);
    }

    pub fn decrement(&self) {
        self.dispatch(CounterIntent::Decrement);
    }

    pub fn current_value(&self) -> i32 {
        self.count.get()
    }

    /// The callback receives the current value immediately, then every
    /// change until the returned handle is unsubscribed or dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription<i32>
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        self.count.subscribe(move |&count| callback(count))
    }

    pub fn subscriber_count(&self) -> usize {
        self.count.subscriber_count()
    }
}
