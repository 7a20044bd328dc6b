//! UI helper functions for terminal output formatting.
//!
//! This module provides utility functions for consistent user interface output
//! across CLI commands, including error messages, warnings, and banners.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// A full-width section banner, used for round and settlement headers.
pub fn banner(out: &mut dyn Write, title: &str) -> std::io::Result<()> {
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "{:^50}", title)?;
    writeln!(out, "{}", "=".repeat(50))
}

/// A lighter divider for in-round phases like the dealer's play.
pub fn divider(out: &mut dyn Write, title: &str) -> std::io::Result<()> {
    writeln!(out, "{}", "-".repeat(50))?;
    writeln!(out, "{:^50}", title)?;
    writeln!(out, "{}", "-".repeat(50))
}
