//! Send notification use case

use std::sync::Arc;

use thiserror::Error;

use crate::domain::error::NotificationError;
use crate::domain::notification::{KindId, NotificationKind};
use crate::domain::platform::Platform;

use super::notification::Notification;
use super::ports::PlatformRenderer;

/// Errors from the send use case
#[derive(Debug, Error)]
pub enum SendError {
    #[error("A {kind} notification needs a media URL (--media)")]
    MissingMedia { kind: KindId },

    #[error("A text notification does not take a media URL")]
    UnexpectedMedia,

    #[error(transparent)]
    Notification(#[from] NotificationError),
}

/// Input parameters for the send use case
#[derive(Debug, Clone, Default)]
pub struct SendInput {
    pub kind: KindId,
    pub title: String,
    pub content: String,
    pub media_url: Option<String>,
}

/// Output from the send use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutput {
    pub platform: Platform,
    pub kind: KindId,
    /// Whether a media URL was handed to the renderer
    pub media_passed: bool,
}

/// Builds one notification from loose input and sends it through a renderer
pub struct SendNotificationUseCase {
    renderer: Arc<dyn PlatformRenderer>,
}

impl SendNotificationUseCase {
    pub fn new(renderer: Arc<dyn PlatformRenderer>) -> Self {
        Self { renderer }
    }

    /// Execute the use case
    pub fn execute(&self, input: SendInput) -> Result<SendOutput, SendError> {
        let kind = Self::resolve_kind(input.kind, input.media_url)?;
        let media_passed = kind.media_url().is_some();

        let notification = Notification::builder(kind)
            .title(input.title)
            .content(input.content)
            .renderer(Arc::clone(&self.renderer))
            .build()?;
        notification.send();

        Ok(SendOutput {
            platform: self.renderer.platform(),
            kind: input.kind,
            media_passed,
        })
    }

    fn resolve_kind(kind: KindId, media_url: Option<String>) -> Result<NotificationKind, SendError> {
        let Some(url) = media_url else {
            return if kind.has_media() {
                Err(SendError::MissingMedia { kind })
            } else {
                Ok(NotificationKind::Text)
            };
        };
        match kind {
            KindId::Text => Err(SendError::UnexpectedMedia),
            KindId::Image => Ok(NotificationKind::image(url)),
            KindId::Video => Ok(NotificationKind::video(url)),
        }
    }
}
