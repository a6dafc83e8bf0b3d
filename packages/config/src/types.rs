//! Configuration types for forgekit.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use forgekit_catalog::ProjectType;
use forgekit_package_manager::PackageManager;
use serde::{Deserialize, Serialize};

/// The `"forgekit"` section of `package.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ManifestSettings {
    /// Project type identifier.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,

    /// Package manager identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,

    /// Verbose logging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,

    /// Test mode (local registry injection).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// Render absolute paths in task commands.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_full_paths: Option<bool>,
}

/// Settings given explicitly by the caller; `None` means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplicitArgs {
    /// Project type identifier.
    pub project_type: Option<String>,
    /// Package manager identifier.
    pub package_manager: Option<String>,
    /// Verbose logging.
    pub debug: Option<bool>,
    /// Test mode.
    pub test: Option<bool>,
    /// Render absolute paths in task commands.
    pub use_full_paths: Option<bool>,
}

/// Values used when neither explicit arguments nor the manifest set a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Defaults {
    /// Default project type.
    pub project_type: ProjectType,
    /// Default package manager, normally the detected one.
    pub package_manager: PackageManager,
    /// Default debug flag.
    pub debug: bool,
    /// Default test flag.
    pub test: bool,
    /// Default use-full-paths flag.
    pub use_full_paths: bool,
}

/// The resolved settings of one configuration snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionSettings {
    /// Project type.
    pub project_type: ProjectType,
    /// Package manager.
    pub package_manager: PackageManager,
    /// Verbose logging.
    pub debug: bool,
    /// Test mode.
    pub test: bool,
    /// Render absolute paths in task commands.
    pub use_full_paths: bool,
}
