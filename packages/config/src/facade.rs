//! The configuration facade handed to commands and task builders.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use forgekit_catalog::{Catalog, ProjectTypeDefinition, ResolvedPath, ToolingResolution};
use forgekit_package_manager::{EnvHints, detect_in_use};
use forgekit_paths::Roots;

use crate::environment::resolve_settings;
use crate::error::ConfigError;
use crate::manifest::load_manifest_settings;
use crate::types::{Defaults, ExecutionSettings, ExplicitArgs};

#[derive(Debug)]
struct Snapshot {
    args: ExplicitArgs,
    settings: ExecutionSettings,
    tooling: ToolingResolution,
}

/// Resolved settings and tooling paths for one process run.
///
/// Constructed once and passed by reference. Nothing is resolved until
/// [`ConfigFacade::init`] runs; accessors fail with
/// [`ConfigError::NotInitialized`] before that.
#[derive(Debug)]
pub struct ConfigFacade {
    roots: Roots,
    catalog: Catalog,
    hints: EnvHints,
    snapshot: Option<Snapshot>,
}

impl ConfigFacade {
    /// Create an uninitialized facade.
    #[must_use]
    pub const fn new(roots: Roots, catalog: Catalog, hints: EnvHints) -> Self {
        Self {
            roots,
            catalog,
            hints,
            snapshot: None,
        }
    }

    /// Create an uninitialized facade over the built-in catalog.
    ///
    /// # Errors
    ///
    /// * If the built-in catalog fails validation
    pub fn with_builtin_catalog(roots: Roots, hints: EnvHints) -> Result<Self, ConfigError> {
        Ok(Self::new(roots, Catalog::new()?, hints))
    }

    /// Resolve settings and tooling paths.
    ///
    /// Does nothing when already initialized with identical arguments.
    ///
    /// # Errors
    ///
    /// * If the manifest cannot be read or parsed
    /// * If a project type or package manager identifier is invalid
    pub fn init(&mut self, args: ExplicitArgs) -> Result<&ExecutionSettings, ConfigError> {
        if self.snapshot.as_ref().is_some_and(|s| s.args == args) {
            log::trace!("Configuration already initialized with identical arguments");
        } else {
            self.snapshot = Some(self.compute(args)?);
        }

        self.settings()
    }

    /// Recompute settings and tooling paths with the last arguments.
    ///
    /// Needed after files were copied into the project, since resolution is
    /// otherwise cached for the facade's lifetime.
    ///
    /// # Errors
    ///
    /// * If the facade was never initialized
    /// * If resolution fails as in [`Self::init`]
    pub fn reload(&mut self) -> Result<&ExecutionSettings, ConfigError> {
        let args = self.snapshot()?.args.clone();

        self.snapshot = Some(self.compute(args)?);
        self.settings()
    }

    fn compute(&self, args: ExplicitArgs) -> Result<Snapshot, ConfigError> {
        let manifest = load_manifest_settings(&self.roots.project_root)?;
        let defaults = Defaults {
            package_manager: detect_in_use(&self.hints),
            ..Defaults::default()
        };
        let settings = resolve_settings(&args, &manifest, &defaults)?;

        let definition = self.catalog.get_definition(settings.project_type)?;
        let tooling = ToolingResolution::compute(
            definition,
            &self.roots.project_root,
            &self.roots.template_root(),
        );

        for (name, paths) in tooling.iter() {
            for path in paths.iter().flatten() {
                log::debug!("{name}: {} ({})", path.path.display(), path.origin);
            }
        }

        Ok(Snapshot {
            args,
            settings,
            tooling,
        })
    }

    /// Whether [`Self::init`] has run.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.snapshot.is_some()
    }

    fn snapshot(&self) -> Result<&Snapshot, ConfigError> {
        self.snapshot.as_ref().ok_or(ConfigError::NotInitialized)
    }

    /// The resolved settings.
    ///
    /// # Errors
    ///
    /// * If called before [`Self::init`]
    pub fn settings(&self) -> Result<&ExecutionSettings, ConfigError> {
        Ok(&self.snapshot()?.settings)
    }

    /// The cached tooling resolution.
    ///
    /// # Errors
    ///
    /// * If called before [`Self::init`]
    pub fn tooling(&self) -> Result<&ToolingResolution, ConfigError> {
        Ok(&self.snapshot()?.tooling)
    }

    /// Primary resolved path of the tooling file `name`.
    ///
    /// `Ok(None)` when the file resolves nowhere or `name` is not tooling.
    ///
    /// # Errors
    ///
    /// * If called before [`Self::init`]
    pub fn tooling_path(&self, name: &str) -> Result<Option<&Path>, ConfigError> {
        Ok(self.tooling()?.path(name).map(|r| r.path.as_path()))
    }

    /// Every resolved location of the tooling file `name`.
    ///
    /// # Errors
    ///
    /// * If called before [`Self::init`]
    pub fn tooling_paths(
        &self,
        name: &str,
    ) -> Result<Option<&[Option<ResolvedPath>]>, ConfigError> {
        Ok(self.tooling()?.paths(name))
    }

    /// Definition of the resolved project type.
    ///
    /// # Errors
    ///
    /// * If called before [`Self::init`]
    pub fn project_definition(&self) -> Result<&ProjectTypeDefinition, ConfigError> {
        let settings = self.settings()?;
        Ok(self.catalog.get_definition(settings.project_type)?)
    }

    /// Render `path` for use in a shell command.
    ///
    /// Absolute with `use_full_paths`, otherwise relative to the project root
    /// when `path` lies under it.
    ///
    /// # Errors
    ///
    /// * If called before [`Self::init`]
    pub fn command_path(&self, path: &Path) -> Result<String, ConfigError> {
        let settings = self.settings()?;
        if settings.use_full_paths {
            return Ok(path.display().to_string());
        }

        Ok(path
            .strip_prefix(&self.roots.project_root)
            .map_or_else(|_| path.display().to_string(), |rel| rel.display().to_string()))
    }

    /// The catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The project and tool roots.
    #[must_use]
    pub const fn roots(&self) -> &Roots {
        &self.roots
    }
}
