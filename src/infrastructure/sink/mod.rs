//! Output sink infrastructure module
//!
//! Stdout for the CLI, an in-memory buffer for capturing output.

mod memory;
mod stdout;

pub use memory::MemorySink;
pub use stdout::StdoutSink;
