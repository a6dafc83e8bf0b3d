//! Error types for configuration loading.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A project type identifier matched no registered type.
    #[error("Invalid project type: {0}")]
    InvalidProjectType(String),

    /// A package manager identifier matched no supported manager.
    #[error("Invalid package manager: {0}")]
    InvalidPackageManager(String),

    /// Failed to read the manifest file.
    #[error("Failed to read manifest {}: {source}", path.display())]
    ManifestRead {
        /// Path to the file that couldn't be read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid JSON.
    #[error("Failed to parse manifest {}: {source}", path.display())]
    ManifestParse {
        /// Path to the file that couldn't be parsed.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The `"forgekit"` section has fields of the wrong type.
    #[error("Invalid forgekit section in {}: {source}", path.display())]
    InvalidManifestSection {
        /// Path to the manifest.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The facade was queried before `init`.
    #[error("Configuration accessed before initialization")]
    NotInitialized,

    /// Catalog error.
    #[error(transparent)]
    Catalog(#[from] forgekit_catalog::CatalogError),
}
