//! Desktop renderer adapter
//!
//! Draws a fixed-width toast box. Widths are terminal columns: CJK and most
//! emoji take two, combining marks take none.

use std::sync::Arc;

use unicode_width::UnicodeWidthStr;

use crate::application::ports::{OutputSink, PlatformRenderer};
use crate::domain::config::RenderSettings;
use crate::domain::platform::{OverflowPolicy, Platform};
use crate::infrastructure::sink::StdoutSink;

const ELLIPSIS: char = '…';

/// Renders notifications as a boxed desktop toast
pub struct DesktopRenderer {
    sink: Arc<dyn OutputSink>,
    width: usize,
    overflow: OverflowPolicy,
}

impl DesktopRenderer {
    /// Create with the default 24-column box
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self::with_settings(sink, &RenderSettings::default())
    }

    pub fn with_settings(sink: Arc<dyn OutputSink>, settings: &RenderSettings) -> Self {
        Self {
            sink,
            width: settings.toast_width(),
            overflow: settings.overflow(),
        }
    }

    /// Fit one line of text into the box interior
    fn fit(&self, text: &str) -> String {
        let width = self.width;
        let used = text.width();
        match self.overflow {
            OverflowPolicy::Truncate if used > width => {
                let mut cut = String::from(truncate_to(text, width.saturating_sub(1)));
                cut.push(ELLIPSIS);
                pad(cut, width)
            }
            _ => pad(text.to_string(), width),
        }
    }
}

/// Longest prefix of `text` that fits in `columns`
fn truncate_to(text: &str, columns: usize) -> &str {
    let mut end = 0;
    for (i, c) in text.char_indices() {
        let next = i + c.len_utf8();
        if text[..next].width() > columns {
            break;
        }
        end = next;
    }
    &text[..end]
}

/// Right-pad with spaces up to `columns`; wider text is returned as-is
fn pad(mut text: String, columns: usize) -> String {
    let used = text.width();
    if used < columns {
        text.push_str(&" ".repeat(columns - used));
    }
    text
}

impl Default for DesktopRenderer {
    fn default() -> Self {
        Self::new(Arc::new(StdoutSink::new()))
    }
}

impl PlatformRenderer for DesktopRenderer {
    fn platform(&self) -> Platform {
        Platform::Desktop
    }

    fn format(&self, title: &str, content: &str, _media_url: Option<&str>) -> String {
        let border = "─".repeat(self.width.saturating_add(2));
        format!(
            "┌{border}┐\n│ {} │\n│ {} │\n└{border}┘",
            self.fit(title),
            self.fit(content),
        )
    }

    fn sink(&self) -> &dyn OutputSink {
        self.sink.as_ref()
    }
}
