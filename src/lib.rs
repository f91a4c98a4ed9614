//! A shared counter exposed to in-process and foreign UIs.
//!
//! - [`Counter`]: the value itself.
//! - [`CounterStream`]: reactive view-model with synchronous reads and
//!   ordered, synchronous change notification to any number of subscribers.
//! - [`CounterBridge`]: single-callback adapter for runtimes that cannot
//!   observe a stream, with a C ABI in [`bridge::ffi`].
//!
//! All counter arithmetic wraps at the `i32` bounds.

pub mod bridge;
pub mod config;
pub mod counter;
pub mod logging;
pub mod observable;
pub mod stream;
pub mod ui;

pub use bridge::CounterBridge;
pub use counter::Counter;
pub use observable::{Observable, Subscription};
pub use stream::CounterStream;
