//! In-memory sink adapter

use std::sync::{Mutex, MutexGuard};

use crate::application::ports::OutputSink;

/// Collects rendered blocks in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    blocks: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All blocks emitted so far, oldest first
    pub fn blocks(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// The most recently emitted block
    pub fn last(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    /// All blocks joined the way [`super::StdoutSink`] would print them
    pub fn contents(&self) -> String {
        self.lock().iter().map(|b| format!("{b}\n")).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        // A poisoned buffer still holds valid strings
        self.blocks.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl OutputSink for MemorySink {
    fn emit(&self, block: &str) {
        self.lock().push(block.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_blocks_in_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.emit("first");
        sink.emit("second");

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.blocks(), vec!["first", "second"]);
        assert_eq!(sink.last().as_deref(), Some("second"));
        assert_eq!(sink.contents(), "first\nsecond\n");
    }
}
