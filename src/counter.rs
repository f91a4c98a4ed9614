//! The counter value itself.

/// A single signed integer, starting at zero.
///
/// Arithmetic wraps at the `i32` bounds: incrementing `i32::MAX` yields
/// `i32::MIN` and decrementing `i32::MIN` yields `i32::MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    count: i32,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.count = self.count.wrapping_add(1);
    }

    /// No floor at zero.
    pub fn decrement(&mut self) {
        self.count = self.count.wrapping_sub(1);
    }

    pub fn get(&self) -> i32 {
        self.count
    }
}
