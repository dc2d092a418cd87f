//! Configuration domain module

mod app_config;
mod render_settings;

pub use app_config::{AppConfig, DesktopConfig};
pub use render_settings::{check_toast_width, parse_toast_width, RenderSettings, DEFAULT_TOAST_WIDTH};
