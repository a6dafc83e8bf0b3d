//! File listing using jwalk.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

/// List regular files under a path, in sorted order.
///
/// - If path is a file: returns the path itself
/// - If path is a directory: returns all files recursively, hidden ones included
/// - If path doesn't exist or is a symlink: returns nothing
#[must_use]
pub fn list_files(path: &Path) -> Vec<PathBuf> {
    if !path.exists() || path.is_symlink() {
        return Vec::new();
    }

    if path.is_file() {
        return vec![path.to_path_buf()];
    }

    jwalk::WalkDir::new(path)
        .skip_hidden(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .collect()
}
