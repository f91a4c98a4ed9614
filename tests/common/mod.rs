//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use std::sync::Arc;

/// Records every value a callback receives.
#[derive(Clone, Default)]
pub struct Recorder {
    values: Arc<Mutex<Vec<i32>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends into this recorder.
    pub fn sink(&self) -> impl Fn(i32) + Send + Sync + 'static {
        let values = Arc::clone(&self.values);
        move |value| values.lock().push(value)
    }

    pub fn values(&self) -> Vec<i32> {
        self.values.lock().clone()
    }

    pub fn last(&self) -> Option<i32> {
        self.values.lock().last().copied()
    }

    pub fn len(&self) -> usize {
        self.values.lock().len()
    }
}
