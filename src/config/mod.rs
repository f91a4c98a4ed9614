//! Configuration for the terminal front end.
//!
//! The counter core takes no configuration; this only covers the demo UI
//! and its logging.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, UiConfig};
