//! Project manifest (`package.json`) loader.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use forgekit_paths::{MANIFEST_FILE, TOOL_NAME};

use crate::error::ConfigError;
use crate::types::ManifestSettings;

/// Read and parse a JSON manifest file.
///
/// # Arguments
///
/// * `path` - Path to the manifest
///
/// # Errors
///
/// * If the file cannot be read
/// * If the file is not valid JSON
pub fn read_manifest(path: &Path) -> Result<serde_json::Value, ConfigError> {
    log::debug!("Loading manifest from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| ConfigError::ManifestRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigError::ManifestParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the `"forgekit"` section of the project's manifest.
///
/// A missing manifest, or a manifest without the section, yields
/// [`ManifestSettings::default`].
///
/// # Arguments
///
/// * `project_root` - Directory that may contain `package.json`
///
/// # Errors
///
/// * If the manifest exists but cannot be read or parsed
/// * If the section holds fields of the wrong type
pub fn load_manifest_settings(project_root: &Path) -> Result<ManifestSettings, ConfigError> {
    let path = project_root.join(MANIFEST_FILE);
    if !path.is_file() {
        log::debug!("No manifest at {}, using defaults", path.display());
        return Ok(ManifestSettings::default());
    }

    let manifest = read_manifest(&path)?;
    let Some(section) = manifest.get(TOOL_NAME).filter(|v| v.is_object()) else {
        log::debug!("Manifest has no {TOOL_NAME} section");
        return Ok(ManifestSettings::default());
    };

    let settings: ManifestSettings =
        serde_json::from_value(section.clone()).map_err(|e| ConfigError::InvalidManifestSection {
            path: path.clone(),
            source: e,
        })?;

    log::debug!("Loaded manifest settings: {settings:?}");

    Ok(settings)
}
