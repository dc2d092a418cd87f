//! Platform renderer port interface

use crate::domain::platform::Platform;

use super::sink::OutputSink;

/// Port for platform-specific rendering of a notification.
///
/// Implementations differ only in formatting. Rendering never fails and
/// performs no validation: empty strings are rendered as-is.
pub trait PlatformRenderer: Send + Sync {
    /// The platform this renderer targets.
    fn platform(&self) -> Platform;

    /// Format a notification into its platform-specific text.
    ///
    /// # Arguments
    /// * `title` - The notification title
    /// * `content` - The notification body
    /// * `media_url` - Attached media, if the notification kind has one
    ///
    /// Must be a pure function of its arguments.
    fn format(&self, title: &str, content: &str, media_url: Option<&str>) -> String;

    /// The sink rendered blocks are written to.
    fn sink(&self) -> &dyn OutputSink;

    /// Format and write a notification to the sink.
    fn render(&self, title: &str, content: &str, media_url: Option<&str>) {
        tracing::debug!(
            platform = %self.platform(),
            has_media = media_url.is_some(),
            "rendering notification"
        );
        let block = self.format(title, content, media_url);
        self.sink().emit(&block);
    }
}
