//! Notification abstraction
//!
//! A notification knows *what* it shows (title, content and the media of its
//! kind) and hands *how* to show it to a shared [`PlatformRenderer`]. Any kind
//! works on any platform, so adding either side needs one new type, not one
//! per combination.

use std::fmt;
use std::sync::Arc;

use crate::domain::error::NotificationError;
use crate::domain::notification::NotificationKind;

use super::ports::PlatformRenderer;

/// A notification bound to the renderer that will display it
#[derive(Clone)]
pub struct Notification {
    title: String,
    content: String,
    kind: NotificationKind,
    renderer: Arc<dyn PlatformRenderer>,
}

impl Notification {
    /// Start building a notification of the given kind
    pub fn builder(kind: NotificationKind) -> NotificationBuilder {
        NotificationBuilder::new(kind)
    }

    /// Plain text notification
    pub fn text(
        renderer: Arc<dyn PlatformRenderer>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self::new(renderer, title, content, NotificationKind::Text)
    }

    /// Notification with an attached image
    pub fn image(
        renderer: Arc<dyn PlatformRenderer>,
        title: impl Into<String>,
        content: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self::new(renderer, title, content, NotificationKind::image(image_url))
    }

    /// Notification with an attached video
    pub fn video(
        renderer: Arc<dyn PlatformRenderer>,
        title: impl Into<String>,
        content: impl Into<String>,
        video_url: impl Into<String>,
    ) -> Self {
        Self::new(renderer, title, content, NotificationKind::video(video_url))
    }

    /// Notification of any kind, bound to `renderer`
    pub fn new(
        renderer: Arc<dyn PlatformRenderer>,
        title: impl Into<String>,
        content: impl Into<String>,
        kind: NotificationKind,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            kind,
            renderer,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> &NotificationKind {
        &self.kind
    }

    pub fn renderer(&self) -> &Arc<dyn PlatformRenderer> {
        &self.renderer
    }

    /// Display the notification through its renderer.
    ///
    /// Makes exactly one `render` call. Text notifications pass no media URL.
    pub fn send(&self) {
        self.renderer
            .render(&self.title, &self.content, self.kind.media_url());
    }
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("title", &self.title)
            .field("content", &self.content)
            .field("kind", &self.kind)
            .field("platform", &self.renderer.platform())
            .finish()
    }
}

/// Step-by-step construction of a [`Notification`].
///
/// The renderer is a required dependency: [`NotificationBuilder::build`]
/// fails with [`NotificationError::MissingRenderer`] when none was given.
#[derive(Default)]
pub struct NotificationBuilder {
    title: String,
    content: String,
    kind: Option<NotificationKind>,
    renderer: Option<Arc<dyn PlatformRenderer>>,
}

impl NotificationBuilder {
    pub fn new(kind: NotificationKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn renderer(mut self, renderer: Arc<dyn PlatformRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn build(self) -> Result<Notification, NotificationError> {
        let renderer = self.renderer.ok_or(NotificationError::MissingRenderer)?;
        Ok(Notification::new(
            renderer,
            self.title,
            self.content,
            self.kind.unwrap_or(NotificationKind::Text),
        ))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::application::ports::OutputSink;
    use crate::domain::notification::{KindId, ALL_KINDS};
    use crate::domain::platform::{Platform, ALL_PLATFORMS};

    /// One observed `render` call
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) struct RenderCall {
        pub title: String,
        pub content: String,
        pub media_url: Option<String>,
    }

    struct NullSink;

    impl OutputSink for NullSink {
        fn emit(&self, _block: &str) {}
    }

    /// Renderer that records every call instead of formatting
    pub(crate) struct RecordingRenderer {
        platform: Platform,
        calls: Mutex<Vec<RenderCall>>,
        sink: NullSink,
    }

    impl RecordingRenderer {
        pub(crate) fn new(platform: Platform) -> Arc<Self> {
            Arc::new(Self {
                platform,
                calls: Mutex::new(Vec::new()),
                sink: NullSink,
            })
        }

        pub(crate) fn calls(&self) -> Vec<RenderCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl PlatformRenderer for RecordingRenderer {
        fn platform(&self) -> Platform {
            self.platform
        }

        fn format(&self, title: &str, content: &str, _media_url: Option<&str>) -> String {
            format!("{title}|{content}")
        }

        fn sink(&self) -> &dyn OutputSink {
            &self.sink
        }

        fn render(&self, title: &str, content: &str, media_url: Option<&str>) {
            self.calls.lock().unwrap().push(RenderCall {
                title: title.to_string(),
                content: content.to_string(),
                media_url: media_url.map(str::to_string),
            });
        }
    }

    fn kind_for(id: KindId) -> NotificationKind {
        match id {
            KindId::Text => NotificationKind::Text,
            KindId::Image => NotificationKind::image("picture.png"),
            KindId::Video => NotificationKind::video("clip.mp4"),
        }
    }

    #[test]
    fn send_delegates_exactly_once_for_every_combination() {
        for platform in ALL_PLATFORMS {
            for kind_id in ALL_KINDS {
                let renderer = RecordingRenderer::new(*platform);
                let kind = kind_for(*kind_id);
                let expected_media = kind.media_url().map(str::to_string);

                let notification = Notification::builder(kind)
                    .title("Title")
                    .content("Body")
                    .renderer(renderer.clone())
                    .build()
                    .unwrap();
                notification.send();

                assert_eq!(
                    renderer.calls(),
                    vec![RenderCall {
                        title: "Title".to_string(),
                        content: "Body".to_string(),
                        media_url: expected_media,
                    }],
                    "{kind_id} on {platform}"
                );
            }
        }
    }

    #[test]
    fn text_never_passes_media() {
        let renderer = RecordingRenderer::new(Platform::Desktop);
        Notification::text(renderer.clone(), "Hi", "there").send();
        assert_eq!(renderer.calls()[0].media_url, None);
    }

    #[test]
    fn image_and_video_pass_their_urls() {
        let renderer = RecordingRenderer::new(Platform::Web);
        Notification::image(renderer.clone(), "Promoção", "50% de desconto!", "promo.jpg").send();
        Notification::video(renderer.clone(), "Tutorial", "Aprenda a usar o app", "tutorial.mp4")
            .send();

        let calls = renderer.calls();
        assert_eq!(calls[0].media_url.as_deref(), Some("promo.jpg"));
        assert_eq!(calls[1].media_url.as_deref(), Some("tutorial.mp4"));
    }

    #[test]
    fn renderer_is_shared_between_notifications() {
        let renderer = RecordingRenderer::new(Platform::Mobile);
        let first = Notification::text(renderer.clone(), "a", "b");
        let second = Notification::text(renderer.clone(), "c", "d");
        first.send();
        second.send();
        drop(first);
        assert_eq!(renderer.calls().len(), 2);
        assert_eq!(second.renderer().platform(), Platform::Mobile);
    }

    #[test]
    fn build_without_renderer_fails() {
        let err = Notification::builder(NotificationKind::Text)
            .title("Orphan")
            .build()
            .unwrap_err();
        assert_eq!(err, NotificationError::MissingRenderer);
    }

    #[test]
    fn accessors_expose_constructed_fields() {
        let renderer = RecordingRenderer::new(Platform::Web);
        let notification = Notification::video(renderer, "T", "C", "v.mp4");
        assert_eq!(notification.title(), "T");
        assert_eq!(notification.content(), "C");
        assert_eq!(notification.kind().id(), KindId::Video);
    }

    #[test]
    fn new_sends_the_given_kind() {
        let renderer = RecordingRenderer::new(Platform::Web);
        let notification = Notification::new(
            renderer.clone(),
            "Promoção",
            "50% de desconto!",
            NotificationKind::image("promo.jpg"),
        );
        notification.send();

        assert_eq!(
            renderer.calls(),
            vec![RenderCall {
                title: "Promoção".to_string(),
                content: "50% de desconto!".to_string(),
                media_url: Some("promo.jpg".to_string()),
            }]
        );
    }
}
