//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging setup,
//! the showcase harness and the command runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod logging;
pub mod presenter;
pub mod showcase;

// Re-export commonly used types
pub use app::{run_demo, run_send, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, DemoArgs, SendArgs};
pub use presenter::Presenter;
pub use showcase::{Showcase, ShowcaseReport};
