//! Stdout sink adapter

use std::io::{self, Write};

use crate::application::ports::OutputSink;

/// Writes each rendered block to stdout, followed by a newline
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for StdoutSink {
    fn emit(&self, block: &str) {
        let mut out = io::stdout().lock();
        // Rendering is infallible, write errors are dropped
        let _ = writeln!(out, "{}", block);
        let _ = out.flush();
    }
}
