//! Output sink port interface

/// Port for the destination of rendered notification blocks.
///
/// Emitting is infallible: a sink that cannot write drops the block.
pub trait OutputSink: Send + Sync {
    /// Write one rendered block.
    fn emit(&self, block: &str);
}
