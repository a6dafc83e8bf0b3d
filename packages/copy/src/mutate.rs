//! In-place text edits of copied files.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::CopyError;

/// Replace every occurrence of `token` in a text file.
///
/// Returns the number of replacements made. The file is rewritten as a whole,
/// and only when something was replaced.
///
/// # Errors
///
/// * If the file cannot be read as UTF-8 text
/// * If the file cannot be written
pub fn replace_in_file(path: &Path, token: &str, replacement: &str) -> Result<usize, CopyError> {
    let content = fs::read_to_string(path).map_err(|e| CopyError::ReadError {
        path: path.to_path_buf(),
        io_error: e,
    })?;

    let count = content.matches(token).count();
    if count == 0 {
        return Ok(0);
    }

    fs::write(path, content.replace(token, replacement)).map_err(|e| CopyError::WriteError {
        path: path.to_path_buf(),
        io_error: e,
    })?;

    log::trace!("Replaced {count} occurrences in {}", path.display());

    Ok(count)
}

/// Append `line` to a file as a new line.
///
/// A newline is inserted first when the file does not already end with one.
///
/// # Errors
///
/// * If the file cannot be read
/// * If the file cannot be opened for appending or written
pub fn append_line(path: &Path, line: &str) -> Result<(), CopyError> {
    let existing = fs::read(path).map_err(|e| CopyError::ReadError {
        path: path.to_path_buf(),
        io_error: e,
    })?;

    let mut text = String::new();
    if !existing.is_empty() && !existing.ends_with(b"\n") {
        text.push('\n');
    }
    text.push_str(line);
    text.push('\n');

    let write_error = |e: std::io::Error| CopyError::WriteError {
        path: path.to_path_buf(),
        io_error: e,
    };

    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(write_error)?;
    file.write_all(text.as_bytes()).map_err(write_error)?;

    Ok(())
}
