//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces:
//! platform renderers, output sinks and the config file store.

pub mod config;
pub mod rendering;
pub mod sink;

// Re-export adapters
pub use config::XdgConfigStore;
pub use rendering::{create_renderer, DesktopRenderer, MobileRenderer, WebRenderer};
pub use sink::{MemorySink, StdoutSink};
