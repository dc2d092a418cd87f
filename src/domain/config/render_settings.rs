//! Renderer layout settings

use crate::domain::platform::OverflowPolicy;

/// Inner width of the desktop toast box
pub const DEFAULT_TOAST_WIDTH: usize = 24;
pub const MIN_TOAST_WIDTH: usize = 8;
pub const MAX_TOAST_WIDTH: usize = 80;

/// Check that a toast width is inside the supported range
pub fn check_toast_width(width: usize) -> Result<usize, String> {
    if (MIN_TOAST_WIDTH..=MAX_TOAST_WIDTH).contains(&width) {
        Ok(width)
    } else {
        Err(format!(
            "Width must be between {} and {}",
            MIN_TOAST_WIDTH, MAX_TOAST_WIDTH
        ))
    }
}

/// Parse a toast width from user input (flag or `config set`)
pub fn parse_toast_width(value: &str) -> Result<usize, String> {
    let width: usize = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a whole number", value))?;
    check_toast_width(width)
}

/// Layout knobs shared by the renderer adapters.
/// Only the desktop toast has a fixed-width layout today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    toast_width: usize,
    overflow: OverflowPolicy,
}

impl RenderSettings {
    /// Create settings, clamping the width into the supported range
    pub fn new(toast_width: usize, overflow: OverflowPolicy) -> Self {
        Self {
            toast_width: toast_width.clamp(MIN_TOAST_WIDTH, MAX_TOAST_WIDTH),
            overflow,
        }
    }

    pub fn toast_width(&self) -> usize {
        self.toast_width
    }

    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            toast_width: DEFAULT_TOAST_WIDTH,
            overflow: OverflowPolicy::default(),
        }
    }
}
