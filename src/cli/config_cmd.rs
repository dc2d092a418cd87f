//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{parse_toast_width, AppConfig, DesktopConfig};
use crate::domain::error::ConfigError;
use crate::domain::platform::{OverflowPolicy, Platform};

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let mut config = store.load().await?;
    apply_config_value(&mut config, key, value)?;

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let config = store.load().await?;
    match config_value(&config, key) {
        Some(v) => presenter.output(&v),
        None => presenter.output(NOT_SET),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(
            key,
            &config_value(&config, key).unwrap_or_else(|| NOT_SET.to_string()),
        );
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_known_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Read one key from the config as display text
fn config_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "platform" => config.platform.clone(),
        "color" => config.color.map(|b| b.to_string()),
        "desktop.width" => config
            .desktop
            .as_ref()
            .and_then(|d| d.width)
            .map(|w| w.to_string()),
        "desktop.overflow" => config.desktop.as_ref().and_then(|d| d.overflow.clone()),
        _ => None,
    }
}

/// Validate a value and store it under its key
fn apply_config_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "platform" => {
            let platform = value
                .parse::<Platform>()
                .map_err(|e| invalid(e.to_string()))?;
            config.platform = Some(platform.to_string());
        }
        "color" => {
            let color =
                parse_bool(value).map_err(|_| invalid("Value must be 'true' or 'false'".into()))?;
            config.color = Some(color);
        }
        "desktop.width" => {
            let width = parse_toast_width(value).map_err(invalid)?;
            config.desktop.get_or_insert_with(DesktopConfig::default).width = Some(width);
        }
        "desktop.overflow" => {
            let overflow = value
                .parse::<OverflowPolicy>()
                .map_err(|e| invalid(e.to_string()))?;
            config
                .desktop
                .get_or_insert_with(DesktopConfig::default)
                .overflow = Some(overflow.to_string());
        }
        _ => return Err(invalid("Unknown key".into())),
    }
    Ok(())
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}
