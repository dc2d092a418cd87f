//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::config::parse_toast_width;
use crate::domain::notification::KindId;
use crate::domain::platform::{OverflowPolicy, Platform};

/// NotifyBridge - one notification abstraction, many platform renderers
#[derive(Parser, Debug)]
#[command(name = "notify-bridge")]
#[command(version)]
#[command(about = "Bridge pattern showcase: text, image and video notifications on web, mobile and desktop")]
#[command(long_about = None)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Desktop toast inner width in columns (8-80)
    #[arg(long, value_name = "COLS", global = true, value_parser = parse_toast_width)]
    pub width: Option<usize>,

    /// What the desktop toast does with text wider than the box
    #[arg(long, value_name = "POLICY", global = true)]
    pub overflow: Option<OverflowArg>,

    /// Disable colored status output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file to use instead of the XDG default
    #[arg(long, value_name = "FILE", env = "NOTIFY_BRIDGE_CONFIG", global = true)]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the showcase (default when no subcommand is given)
    Demo(DemoArgs),
    /// Send a single notification
    Send(SendArgs),
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Showcase options
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct DemoArgs {
    /// Only render the kind x platform matrix
    #[arg(long, conflicts_with = "no_matrix")]
    pub matrix_only: bool,

    /// Skip the kind x platform matrix
    #[arg(long)]
    pub no_matrix: bool,
}

/// Options for sending one notification
#[derive(Args, Debug, Clone)]
pub struct SendArgs {
    /// Platform to render on (defaults to the configured platform)
    #[arg(short = 'p', long, env = "NOTIFY_BRIDGE_PLATFORM")]
    pub platform: Option<PlatformArg>,

    /// Notification kind
    #[arg(short = 'k', long, default_value = "text")]
    pub kind: KindArg,

    /// Notification title
    #[arg(short = 't', long)]
    pub title: String,

    /// Notification body
    #[arg(short = 'c', long)]
    pub content: String,

    /// Image or video URL (image and video kinds only)
    #[arg(short = 'm', long, value_name = "URL")]
    pub media: Option<String>,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Platform argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    Web,
    Mobile,
    Desktop,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Web => Platform::Web,
            PlatformArg::Mobile => Platform::Mobile,
            PlatformArg::Desktop => Platform::Desktop,
        }
    }
}

/// Notification kind argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Text,
    Image,
    Video,
}

impl From<KindArg> for KindId {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Text => KindId::Text,
            KindArg::Image => KindId::Image,
            KindArg::Video => KindId::Video,
        }
    }
}

/// Overflow policy argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OverflowArg {
    Truncate,
    Overflow,
}

impl From<OverflowArg> for OverflowPolicy {
    fn from(arg: OverflowArg) -> Self {
        match arg {
            OverflowArg::Truncate => OverflowPolicy::Truncate,
            OverflowArg::Overflow => OverflowPolicy::Overflow,
        }
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["platform", "color", "desktop.width", "desktop.overflow"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
