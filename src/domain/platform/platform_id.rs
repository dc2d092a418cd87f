//! Platform value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidPlatformError;

/// All available platforms
pub const ALL_PLATFORMS: &[Platform] = &[Platform::Web, Platform::Mobile, Platform::Desktop];

/// Platforms a notification can be rendered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    #[default]
    Web,
    Mobile,
    Desktop,
}

impl Platform {
    /// Get the human-readable label for this platform
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Web => "Web Browser",
            Self::Mobile => "Mobile Push",
            Self::Desktop => "Desktop Toast",
        }
    }

    /// Get the string identifier for this platform
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        }
    }
}

impl FromStr for Platform {
    type Err = InvalidPlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "web" => Ok(Self::Web),
            "mobile" => Ok(Self::Mobile),
            "desktop" => Ok(Self::Desktop),
            _ => Err(InvalidPlatformError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
