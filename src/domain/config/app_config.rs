//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::platform::{OverflowPolicy, Platform};

use super::render_settings::{RenderSettings, DEFAULT_TOAST_WIDTH};

/// Desktop toast configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopConfig {
    pub width: Option<usize>,
    pub overflow: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub platform: Option<String>,
    pub color: Option<bool>,
    pub desktop: Option<DesktopConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            platform: Some(Platform::default().to_string()),
            color: Some(true),
            desktop: Some(DesktopConfig {
                width: Some(DEFAULT_TOAST_WIDTH),
                overflow: Some(OverflowPolicy::default().to_string()),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            platform: other.platform.or(self.platform),
            color: other.color.or(self.color),
            desktop: Self::merge_desktop_config(self.desktop, other.desktop),
        }
    }

    fn merge_desktop_config(
        base: Option<DesktopConfig>,
        other: Option<DesktopConfig>,
    ) -> Option<DesktopConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(DesktopConfig {
                width: o.width.or(b.width),
                overflow: o.overflow.or(b.overflow),
            }),
        }
    }

    /// Get platform as parsed Platform, or default if not set/invalid
    pub fn platform_or_default(&self) -> Platform {
        self.platform
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get color setting, or true if not set
    pub fn color_or_default(&self) -> bool {
        self.color.unwrap_or(true)
    }

    pub fn desktop_width_or_default(&self) -> usize {
        self.desktop
            .as_ref()
            .and_then(|d| d.width)
            .unwrap_or(DEFAULT_TOAST_WIDTH)
    }

    pub fn overflow_or_default(&self) -> OverflowPolicy {
        self.desktop
            .as_ref()
            .and_then(|d| d.overflow.as_ref())
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Build renderer settings from the merged config
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings::new(self.desktop_width_or_default(), self.overflow_or_default())
    }
}
