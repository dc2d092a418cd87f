//! XDG config store adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::{check_toast_width, AppConfig};
use crate::domain::error::ConfigError;
use crate::domain::platform::OverflowPolicy;

/// XDG-compliant config store
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    /// Create a new XDG config store with default path
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("notify-bridge");

        Self {
            path: config_dir.join("config.toml"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse_toml(content: &str) -> Result<AppConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn to_toml(config: &AppConfig) -> Result<String, ConfigError> {
        toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    /// Drop `[desktop]` values the toast cannot use, warning about each.
    /// The rest of the file still applies.
    fn validate_desktop(&self, mut config: AppConfig) -> AppConfig {
        if let Some(desktop) = config.desktop.as_mut() {
            if let Some(width) = desktop.width {
                if let Err(message) = check_toast_width(width) {
                    tracing::warn!(
                        path = %self.path.display(),
                        width,
                        "ignoring desktop.width: {}",
                        message
                    );
                    desktop.width = None;
                }
            }

            if let Some(overflow) = desktop.overflow.take() {
                match overflow.parse::<OverflowPolicy>() {
                    Ok(policy) => desktop.overflow = Some(policy.to_string()),
                    Err(e) => tracing::warn!(
                        path = %self.path.display(),
                        "ignoring desktop.overflow: {}",
                        e
                    ),
                }
            }
        }
        config
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.exists() {
            return Ok(AppConfig::empty());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        let config = Self::parse_toml(&content)?;
        Ok(self.validate_desktop(config))
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content = Self::to_toml(config)?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        tracing::debug!(path = %self.path.display(), "config saved");
        Ok(())
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(
                self.path.to_string_lossy().to_string(),
            ));
        }

        self.save(&AppConfig::defaults()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::DesktopConfig;
    use crate::domain::platform::{OverflowPolicy, Platform};

    #[test]
    fn default_path_is_xdg() {
        let store = XdgConfigStore::new();
        let path = store.path();
        assert!(path.to_string_lossy().contains("notify-bridge"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn custom_path() {
        let store = XdgConfigStore::with_path("/custom/path/config.toml");
        assert_eq!(store.path(), PathBuf::from("/custom/path/config.toml"));
    }

    #[test]
    fn parse_toml_with_desktop_table() {
        let content = r#"
platform = "desktop"
color = false

[desktop]
width = 30
overflow = "overflow"
"#;

        let config = XdgConfigStore::parse_toml(content).unwrap();
        assert_eq!(config.platform_or_default(), Platform::Desktop);
        assert!(!config.color_or_default());
        assert_eq!(config.desktop_width_or_default(), 30);
        assert_eq!(config.overflow_or_default(), OverflowPolicy::Overflow);
    }

    #[test]
    fn parse_toml_rejects_garbage() {
        assert!(matches!(
            XdgConfigStore::parse_toml("platform = ["),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn to_toml_round_trip() {
        let config = AppConfig {
            platform: Some("mobile".to_string()),
            desktop: Some(DesktopConfig {
                width: Some(40),
                overflow: None,
            }),
            ..Default::default()
        };

        let toml = XdgConfigStore::to_toml(&config).unwrap();
        let parsed = XdgConfigStore::parse_toml(&toml).unwrap();
        assert_eq!(config, parsed);
    }

    #[tokio::test]
    async fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        assert!(!store.exists());
        assert_eq!(store.load().await.unwrap(), AppConfig::empty());
    }

    #[tokio::test]
    async fn load_drops_unusable_desktop_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "platform = \"mobile\"\n\n[desktop]\nwidth = 500\noverflow = \"wrap\"\n",
        )
        .await
        .unwrap();
        let store = XdgConfigStore::with_path(&path);

        let config = store.load().await.unwrap();
        assert_eq!(config.platform_or_default(), Platform::Mobile);
        assert_eq!(config.desktop, Some(DesktopConfig::default()));
        assert_eq!(config.desktop_width_or_default(), 24);
    }

    #[tokio::test]
    async fn load_normalizes_overflow_and_keeps_valid_width() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[desktop]\nwidth = 80\noverflow = \"OVERFLOW\"\n")
            .await
            .unwrap();
        let store = XdgConfigStore::with_path(&path);

        let config = store.load().await.unwrap();
        let desktop = config.desktop.unwrap();
        assert_eq!(desktop.width, Some(80));
        assert_eq!(desktop.overflow.as_deref(), Some("overflow"));
    }

    #[tokio::test]
    async fn init_writes_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("nested").join("config.toml"));

        store.init().await.unwrap();
        assert_eq!(store.load().await.unwrap(), AppConfig::defaults());

        assert!(matches!(
            store.init().await,
            Err(ConfigError::AlreadyExists(_))
        ));
    }
}
