//! Project root discovery.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::{Path, PathBuf};

use crate::MANIFEST_FILE;

/// Whether `dir` directly contains a project manifest.
#[must_use]
pub fn has_manifest(dir: &Path) -> bool {
    dir.join(MANIFEST_FILE).is_file()
}

/// Find the project root by walking upward from `start`.
///
/// Returns the first directory (starting with `start` itself) that contains a
/// `package.json`. When the filesystem root is reached without a match,
/// `start` is returned unchanged.
#[must_use]
pub fn find_project_root(start: &Path) -> PathBuf {
    log::debug!("Searching for project root from {}", start.display());

    for dir in start.ancestors() {
        if has_manifest(dir) {
            log::debug!("Found project root at {}", dir.display());
            return dir.to_path_buf();
        }
    }

    log::debug!("No manifest found above {}", start.display());
    start.to_path_buf()
}

/// Read the `name` field of the manifest in `dir`.
///
/// Returns `None` when there is no manifest, it is not valid JSON, or it has
/// no string `name`.
#[must_use]
pub fn manifest_name(dir: &Path) -> Option<String> {
    let path = dir.join(MANIFEST_FILE);
    let content = fs::read_to_string(&path).ok()?;

    match serde_json::from_str::<serde_json::Value>(&content) {
        Ok(value) => value
            .get("name")
            .and_then(serde_json::Value::as_str)
            .map(String::from),
        Err(e) => {
            log::debug!("Ignoring unreadable manifest {}: {e}", path.display());
            None
        }
    }
}
