//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent user actions (button presses, key presses).
/// Reducers consume them to produce new states.
pub trait Intent: Send + 'static {}
