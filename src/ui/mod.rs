//! User interface module - input gathering and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Reading input from the user

use std::io::{self, BufRead};

use anyhow::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{display_boundary_warning, display_error, display_status};

/// Reads the repository directory from a reader (normally standard input).
///
/// Only the line terminator is dropped; spaces are part of the path.
/// The first non-empty line is used.
///
/// # Returns
/// * `Ok(String)` - The directory
/// * `Err` - If reading fails or the input is empty
pub fn read_directory<R: BufRead>(reader: R) -> Result<String> {
    for line in reader.lines() {
        let line = line?;
        if !line.is_empty() {
            return Ok(line);
        }
    }
    Err(anyhow::anyhow!(
        "expected a repository directory as the single argument or on stdin"
    ))
}

/// Reads the repository directory from standard input.
pub fn read_directory_from_stdin() -> Result<String> {
    read_directory(io::stdin().lock())
}
