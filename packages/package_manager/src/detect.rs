//! Detection of the package manager in use.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use crate::registry::PackageManager;

/// Environment variable package managers set for scripts they run.
pub const USER_AGENT_ENV: &str = "npm_config_user_agent";

/// Environment facts used to detect the package manager.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvHints {
    /// Value of `npm_config_user_agent`, e.g. `pnpm/9.1.0 npm/? node/v20.11.0`.
    pub user_agent: Option<String>,
    /// Where the globally installed tool binary resolves to, if anywhere.
    pub tool_binary: Option<PathBuf>,
}

impl EnvHints {
    /// Collect hints from the current process environment.
    ///
    /// # Arguments
    ///
    /// * `tool_name` - Name of the tool's own binary to look up on `PATH`
    #[must_use]
    pub fn from_env(tool_name: &str) -> Self {
        let user_agent = std::env::var(USER_AGENT_ENV)
            .ok()
            .filter(|ua| !ua.trim().is_empty());

        let tool_binary = which::which(tool_name)
            .ok()
            .map(|path| std::fs::canonicalize(&path).unwrap_or(path));

        Self {
            user_agent,
            tool_binary,
        }
    }
}

/// Detect the package manager in use.
///
/// The user agent hint wins, then the location of the globally installed tool
/// binary. Falls back to [`PackageManager::default`]; never fails.
#[must_use]
pub fn detect_in_use(hints: &EnvHints) -> PackageManager {
    if let Some(pm) = hints.user_agent.as_deref().and_then(parse_user_agent) {
        log::debug!("Detected {pm} from user agent");
        return pm;
    }

    if let Some(pm) = hints.tool_binary.as_deref().and_then(infer_from_path) {
        log::debug!("Detected {pm} from tool binary location");
        return pm;
    }

    log::debug!("No package manager hints, using default");
    PackageManager::default()
}

/// Parse a user agent string such as `yarn/1.22.19 npm/? node/v18.17.0`.
#[must_use]
pub fn parse_user_agent(user_agent: &str) -> Option<PackageManager> {
    let first = user_agent.split_whitespace().next()?;
    let name = first.split('/').next()?;
    name.parse().ok()
}

/// Infer the package manager that installed a binary from its resolved path.
#[must_use]
pub fn infer_from_path(path: &Path) -> Option<PackageManager> {
    let lowered = path.to_string_lossy().replace('\\', "/").to_ascii_lowercase();

    if lowered.contains("/pnpm/") || lowered.contains("/.pnpm/") {
        Some(PackageManager::Pnpm)
    } else if lowered.contains("/.bun/") {
        Some(PackageManager::Bun)
    } else if lowered.contains("/yarn/") || lowered.contains("/.yarn/") {
        Some(PackageManager::Yarn)
    } else if lowered.contains("/node_modules/") || lowered.contains("/npm/") {
        Some(PackageManager::Npm)
    } else {
        None
    }
}
