//! Web renderer adapter

use std::sync::Arc;

use crate::application::ports::{OutputSink, PlatformRenderer};
use crate::domain::platform::Platform;
use crate::infrastructure::sink::StdoutSink;

/// Renders notifications as an HTML-like block
pub struct WebRenderer {
    sink: Arc<dyn OutputSink>,
}

impl WebRenderer {
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }
}

impl Default for WebRenderer {
    fn default() -> Self {
        Self::new(Arc::new(StdoutSink::new()))
    }
}

impl PlatformRenderer for WebRenderer {
    fn platform(&self) -> Platform {
        Platform::Web
    }

    // The web block has no media slot; the URL is accepted and dropped.
    fn format(&self, title: &str, content: &str, _media_url: Option<&str>) -> String {
        format!(
            "<div class='notification'>\n  <h3>{}</h3>\n  <p>{}</p>\n</div>",
            title, content
        )
    }

    fn sink(&self) -> &dyn OutputSink {
        self.sink.as_ref()
    }
}
