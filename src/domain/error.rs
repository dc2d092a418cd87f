//! Domain error types

use thiserror::Error;

/// Error when an unknown platform name is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid platform: \"{input}\". Valid platforms are: web, mobile, desktop")]
pub struct InvalidPlatformError {
    pub input: String,
}

/// Error when an unknown notification kind is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid notification kind: \"{input}\". Valid kinds are: text, image, video")]
pub struct InvalidKindError {
    pub input: String,
}

/// Error when an unknown overflow policy is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid overflow policy: \"{input}\". Valid policies are: truncate, overflow")]
pub struct InvalidOverflowError {
    pub input: String,
}

/// Error when a notification cannot be assembled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error("Missing dependency: a notification needs a platform renderer")]
    MissingRenderer,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
