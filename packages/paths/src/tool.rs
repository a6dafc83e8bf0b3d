//! Tool installation root discovery.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use forgekit_package_manager::PackageManager;

use crate::error::PathError;
use crate::project::manifest_name;
use crate::{TOOL_HOME_ENV, TOOL_NAME};

/// Inputs for the tool root search.
#[derive(Debug, Clone, Default)]
pub struct ToolRootSearch {
    /// Explicit installation directory (`FORGEKIT_HOME`).
    pub home_override: Option<PathBuf>,
    /// Path of the running executable.
    pub executable: Option<PathBuf>,
    /// Managers whose global package folder should be queried.
    pub managers: Vec<PackageManager>,
}

impl ToolRootSearch {
    /// Build a search from the current process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            home_override: std::env::var_os(TOOL_HOME_ENV).map(PathBuf::from),
            executable: std::env::current_exe().ok(),
            managers: PackageManager::ALL.to_vec(),
        }
    }
}

/// Whether `dir` is a forgekit installation (its manifest is named `forgekit`).
#[must_use]
pub fn is_tool_root(dir: &Path) -> bool {
    manifest_name(dir).as_deref() == Some(TOOL_NAME)
}

/// Make `path` absolute against the working directory and normalize it.
pub(crate) fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).map_or_else(|_| path_clean::clean(path), path_clean::clean)
}

/// Find the tool's installation root.
///
/// Strategies, first existing directory wins:
///
/// 1. `FORGEKIT_HOME`, then ancestors of the running executable
/// 2. Ancestors of `project_root` whose manifest is named `forgekit`
/// 3. Each package manager's global package folder
/// 4. `<project_root>/node_modules/forgekit`
///
/// The returned root is always absolute; relative inputs are resolved
/// against the working directory.
///
/// # Errors
///
/// * If every strategy is exhausted without a match
pub fn find_tool_root(project_root: &Path, search: &ToolRootSearch) -> Result<PathBuf, PathError> {
    let project_root = absolute(project_root);
    let mut searched = Vec::new();

    if let Some(home) = &search.home_override {
        let home = absolute(home);
        searched.push(home.clone());
        if home.is_dir() {
            log::debug!("Using tool root from {TOOL_HOME_ENV}: {}", home.display());
            return Ok(home);
        }
    }

    if let Some(exe) = &search.executable {
        let exe = absolute(exe);
        for dir in exe.ancestors().skip(1) {
            searched.push(dir.to_path_buf());
            if is_tool_root(dir) {
                log::debug!("Found tool root above executable: {}", dir.display());
                return Ok(dir.to_path_buf());
            }
        }
    }

    for dir in project_root.ancestors() {
        searched.push(dir.to_path_buf());
        if is_tool_root(dir) {
            log::debug!("Found tool root above project: {}", dir.display());
            return Ok(dir.to_path_buf());
        }
    }

    for pm in &search.managers {
        if let Some(global) = pm.global_root() {
            let candidate = absolute(&global.join(TOOL_NAME));
            searched.push(candidate.clone());
            if candidate.is_dir() {
                log::debug!("Found tool root in {pm} globals: {}", candidate.display());
                return Ok(candidate);
            }
        }
    }

    let guess = project_root.join("node_modules").join(TOOL_NAME);
    searched.push(guess.clone());
    if guess.is_dir() {
        log::debug!("Using local dependency as tool root: {}", guess.display());
        return Ok(guess);
    }

    Err(PathError::ToolRootNotFound { searched })
}
