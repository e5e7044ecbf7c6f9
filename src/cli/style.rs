//! Terminal styling helpers
//!
//! Output goes through `anstream`, which strips these codes when stdout is
//! not a terminal.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Check mark shown before a successful result
pub const CHECK: &str = "✓";

/// Cross shown before a failed result
pub const CROSS: &str = "✗";

/// Semantic styles for CLI output
pub trait Stylize: Display {
    /// Green, for success
    fn success(&self) -> String {
        self.green().to_string()
    }

    /// Red, for failures
    fn warn(&self) -> String {
        self.red().to_string()
    }

    /// Dimmed, for secondary detail
    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    /// Bold, for labels
    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    /// Cyan, for values worth spotting
    fn accent(&self) -> String {
        self.cyan().to_string()
    }
}

impl<T: Display + ?Sized> Stylize for T {}
