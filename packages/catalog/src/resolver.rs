//! Tooling file resolution: the user's local copy wins over the bundled template.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use crate::catalog::ProjectTypeDefinition;
use crate::definition::FileDefinition;

/// Where a resolved tooling file lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// In the user's project.
    Local,
    /// In the tool's bundled templates.
    Template,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Template => write!(f, "template"),
        }
    }
}

/// A resolved tooling file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Absolute path to the winning file.
    pub path: PathBuf,
    /// Which side won.
    pub origin: Origin,
}

/// Resolve each location of a definition independently.
///
/// For every location pair the project copy wins when it exists, otherwise
/// the bundled template when it exists, otherwise `None`. Never fails.
///
/// # Arguments
///
/// * `project_root` - Root of the user's project
/// * `template_root` - Root of the bundled templates
/// * `definition` - The definition to resolve
#[must_use]
pub fn resolve(
    project_root: &Path,
    template_root: &Path,
    definition: &FileDefinition,
) -> Vec<Option<ResolvedPath>> {
    definition
        .locations()
        .iter()
        .map(|location| {
            let local = project_root.join(&location.destination);
            if local.exists() {
                return Some(ResolvedPath {
                    path: local,
                    origin: Origin::Local,
                });
            }

            let template = template_root.join(&location.template);
            if template.exists() {
                return Some(ResolvedPath {
                    path: template,
                    origin: Origin::Template,
                });
            }

            log::debug!(
                "No {} found for {}",
                location.destination.display(),
                definition.name()
            );
            None
        })
        .collect()
}

/// Resolved paths of every overridable definition of a project type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolingResolution {
    entries: Vec<(String, Vec<Option<ResolvedPath>>)>,
}

impl ToolingResolution {
    /// Resolve every overridable definition, in declared order.
    #[must_use]
    pub fn compute(
        definition: &ProjectTypeDefinition,
        project_root: &Path,
        template_root: &Path,
    ) -> Self {
        let entries = definition
            .overridable()
            .map(|def| {
                (
                    def.name().to_string(),
                    resolve(project_root, template_root, def),
                )
            })
            .collect();

        Self { entries }
    }

    /// All resolved locations of `name`, or `None` for unknown names.
    #[must_use]
    pub fn paths(&self, name: &str) -> Option<&[Option<ResolvedPath>]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, paths)| paths.as_slice())
    }

    /// Resolved location `index` of `name`.
    #[must_use]
    pub fn path_at(&self, name: &str, index: usize) -> Option<&ResolvedPath> {
        self.paths(name)?.get(index)?.as_ref()
    }

    /// Primary (first) resolved location of `name`.
    #[must_use]
    pub fn path(&self, name: &str) -> Option<&ResolvedPath> {
        self.path_at(name, 0)
    }

    /// Iterate over `(name, locations)` in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Option<ResolvedPath>])> {
        self.entries
            .iter()
            .map(|(name, paths)| (name.as_str(), paths.as_slice()))
    }
}
