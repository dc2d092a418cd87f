//! Desktop toast overflow policy

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidOverflowError;

/// What a fixed-width layout does with text longer than its width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Cut the text to fit and mark the cut with an ellipsis
    #[default]
    Truncate,
    /// Print the text in full and let the line grow past the border
    Overflow,
}

impl OverflowPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Truncate => "truncate",
            Self::Overflow => "overflow",
        }
    }
}

impl FromStr for OverflowPolicy {
    type Err = InvalidOverflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "truncate" => Ok(Self::Truncate),
            "overflow" => Ok(Self::Overflow),
            _ => Err(InvalidOverflowError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_policies() {
        assert_eq!(
            "truncate".parse::<OverflowPolicy>().unwrap(),
            OverflowPolicy::Truncate
        );
        assert_eq!(
            "OVERFLOW".parse::<OverflowPolicy>().unwrap(),
            OverflowPolicy::Overflow
        );
        assert!("wrap".parse::<OverflowPolicy>().is_err());
    }

    #[test]
    fn default_truncates() {
        assert_eq!(OverflowPolicy::default(), OverflowPolicy::Truncate);
    }
}
