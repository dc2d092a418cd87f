//! CLI presenter for output formatting
//!
//! Status lines and showcase narration go to stderr. Rendered
//! notifications go through an output sink, so stdout carries only those.

use std::io::{self, Write};

use colored::*;
use unicode_width::UnicodeWidthStr;

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Create a presenter, forcing color off when `enabled` is false.
    /// Otherwise colored's own terminal and NO_COLOR detection applies.
    pub fn with_color(enabled: bool) -> Self {
        if !enabled {
            colored::control::set_override(false);
        }
        Self::new()
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        self.output(&format!("{}: {}", key.cyan(), value));
    }

    /// Print a showcase banner to stderr
    pub fn banner(&self, title: &str) {
        let rule = "=".repeat(Self::banner_width(title));
        eprintln!("\n{}\n{}\n{}", rule.bold(), title.bold(), rule.bold());
    }

    /// Print a scenario heading to stderr
    pub fn section(&self, title: &str) {
        eprintln!("\n{} {}", "▸".cyan(), title.bold());
    }

    /// Print an explanatory note to stderr
    pub fn note(&self, text: &str) {
        eprintln!("  {}", text.dimmed());
    }

    fn banner_width(title: &str) -> usize {
        title.width().max(40)
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
