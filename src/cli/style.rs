//! Terminal styling helpers
//!
//! Output goes through `anstream`, which strips the escape codes when stdout
//! is not a terminal.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Check mark used in summaries
pub const CHECK: &str = "✓";

/// Semantic colours for CLI output
pub trait Stylize {
    /// Secondary, de-emphasised text
    fn muted(&self) -> String;
    /// Headings and labels
    fn emphasis(&self) -> String;
    /// Branch names, numbers, identifiers
    fn accent(&self) -> String;
    /// Completed operations
    fn success(&self) -> String;
    /// Skipped PRs and recoverable problems
    fn warn(&self) -> String;
    /// Fatal errors
    fn error(&self) -> String;
}

impl<T: Display> Stylize for T {
    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    fn success(&self) -> String {
        self.green().to_string()
    }

    fn warn(&self) -> String {
        self.yellow().to_string()
    }

    fn error(&self) -> String {
        self.red().bold().to_string()
    }
}

/// Styled check mark
pub fn check() -> String {
    CHECK.success()
}

/// Styled list arrow
pub fn arrow() -> String {
    "→".muted()
}
