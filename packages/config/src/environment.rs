//! Settings resolution: explicit argument, then manifest, then default.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use forgekit_catalog::ProjectType;
use forgekit_package_manager::PackageManager;

use crate::error::ConfigError;
use crate::types::{Defaults, ExecutionSettings, ExplicitArgs, ManifestSettings};

/// Resolve execution settings.
///
/// Every field is resolved on its own: the explicit argument when given,
/// otherwise the manifest value when present, otherwise the default.
///
/// # Arguments
///
/// * `explicit` - Values given by the caller
/// * `manifest` - The manifest's `"forgekit"` section
/// * `defaults` - Fallback values
///
/// # Errors
///
/// * If the chosen project type identifier is not registered
/// * If the chosen package manager identifier is not supported
pub fn resolve_settings(
    explicit: &ExplicitArgs,
    manifest: &ManifestSettings,
    defaults: &Defaults,
) -> Result<ExecutionSettings, ConfigError> {
    let project_type = match explicit
        .project_type
        .as_deref()
        .or(manifest.project_type.as_deref())
    {
        Some(id) => id
            .parse::<ProjectType>()
            .map_err(|_| ConfigError::InvalidProjectType(id.to_string()))?,
        None => defaults.project_type,
    };

    let package_manager = match explicit
        .package_manager
        .as_deref()
        .or(manifest.manager.as_deref())
    {
        Some(id) => id
            .parse::<PackageManager>()
            .map_err(|_| ConfigError::InvalidPackageManager(id.to_string()))?,
        None => defaults.package_manager,
    };

    let settings = ExecutionSettings {
        project_type,
        package_manager,
        debug: explicit.debug.or(manifest.debug).unwrap_or(defaults.debug),
        test: explicit.test.or(manifest.test).unwrap_or(defaults.test),
        use_full_paths: explicit
            .use_full_paths
            .or(manifest.use_full_paths)
            .unwrap_or(defaults.use_full_paths),
    };

    log::debug!("Resolved settings: {settings:?}");

    Ok(settings)
}
