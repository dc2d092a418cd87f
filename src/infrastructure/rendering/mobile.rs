//! Mobile renderer adapter

use std::sync::Arc;

use crate::application::ports::{OutputSink, PlatformRenderer};
use crate::domain::platform::Platform;
use crate::infrastructure::sink::StdoutSink;

/// Icon shown on every push notification, whatever its kind
pub const MOBILE_ICON: &str = "notification_icon.png";

/// Renders notifications as a push-notification card
pub struct MobileRenderer {
    sink: Arc<dyn OutputSink>,
}

impl MobileRenderer {
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }
}

impl Default for MobileRenderer {
    fn default() -> Self {
        Self::new(Arc::new(StdoutSink::new()))
    }
}

impl PlatformRenderer for MobileRenderer {
    fn platform(&self) -> Platform {
        Platform::Mobile
    }

    fn format(&self, title: &str, content: &str, _media_url: Option<&str>) -> String {
        format!(
            "📱 Push Notification\nTitle: {}\nBody: {}\nIcon: {}",
            title, content, MOBILE_ICON
        )
    }

    fn sink(&self) -> &dyn OutputSink {
        self.sink.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::sink::MemorySink;

    #[test]
    fn video_renders_fixed_icon_not_url() {
        let sink = Arc::new(MemorySink::new());
        let renderer = MobileRenderer::new(sink.clone());
        renderer.render("Tutorial", "Aprenda a usar o app", Some("tutorial.mp4"));

        let out = sink.contents();
        assert!(out.contains("Title: Tutorial"));
        assert!(out.contains("Body: Aprenda a usar o app"));
        assert!(out.contains("Icon: notification_icon.png"));
        assert!(!out.contains("tutorial.mp4"));
    }

    #[test]
    fn icon_does_not_depend_on_media() {
        let renderer = MobileRenderer::new(Arc::new(MemorySink::new()));
        let with = renderer.format("t", "c", Some("a.png"));
        let without = renderer.format("t", "c", None);
        assert_eq!(with, without);
    }
}
