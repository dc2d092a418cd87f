//! Notification kind value objects

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidKindError;

/// All available notification kinds
pub const ALL_KINDS: &[KindId] = &[KindId::Text, KindId::Image, KindId::Video];

/// Identifier of a notification kind, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KindId {
    #[default]
    Text,
    Image,
    Video,
}

impl KindId {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
        }
    }

    /// Whether notifications of this kind carry a media URL
    pub const fn has_media(&self) -> bool {
        !matches!(self, Self::Text)
    }
}

impl FromStr for KindId {
    type Err = InvalidKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            _ => Err(InvalidKindError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for KindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The variant part of a notification: what it shows besides title and content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationKind {
    /// Plain text, no media
    Text,
    /// Text with an attached image
    Image { image_url: String },
    /// Text with an attached video
    Video { video_url: String },
}

impl NotificationKind {
    pub fn image(image_url: impl Into<String>) -> Self {
        Self::Image {
            image_url: image_url.into(),
        }
    }

    pub fn video(video_url: impl Into<String>) -> Self {
        Self::Video {
            video_url: video_url.into(),
        }
    }

    /// Get the kind identifier
    pub const fn id(&self) -> KindId {
        match self {
            Self::Text => KindId::Text,
            Self::Image { .. } => KindId::Image,
            Self::Video { .. } => KindId::Video,
        }
    }

    /// Media URL handed to the renderer, if this kind has one
    pub fn media_url(&self) -> Option<&str> {
        match self {
            Self::Text => None,
            Self::Image { image_url } => Some(image_url.as_str()),
            Self::Video { video_url } => Some(video_url.as_str()),
        }
    }
}
