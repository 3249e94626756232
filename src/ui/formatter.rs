//! Pure formatting functions for UI output.
//!
//! Everything here goes to stderr so stdout carries only the pseudo-version.

use console::style;

use crate::boundary::BoundaryWarning;

/// Format an error message with a red prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red(), message)
}

/// Format a status message with a yellow arrow.
pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

/// Format a boundary warning with a yellow warning icon.
pub fn format_boundary_warning(warning: &BoundaryWarning) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow(), warning)
}

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print a status message.
pub fn display_status(message: &str) {
    eprintln!("{}", format_status(message));
}

/// Print a boundary warning.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{}", format_boundary_warning(warning));
}
