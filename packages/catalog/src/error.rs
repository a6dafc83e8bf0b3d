//! Error types for the project type catalog.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error;

/// Errors that can occur while building or querying the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The identifier is not a registered project type.
    #[error("Unknown project type: {0}")]
    UnknownProjectType(String),

    /// An override names a file the base does not declare.
    #[error("Project type {project_type} overrides unknown file definition '{name}'")]
    UnknownOverride {
        /// Project type being built.
        project_type: String,
        /// The offending override name.
        name: String,
    },

    /// A file definition name is declared more than once.
    #[error("File definition '{name}' is declared more than once for {project_type}")]
    DuplicateDefinition {
        /// Project type being built.
        project_type: String,
        /// The duplicated name.
        name: String,
    },

    /// A requested item names no file definition of the project type.
    #[error("Unknown file '{name}' for project type {project_type}")]
    UnknownFile {
        /// Project type that was queried.
        project_type: String,
        /// The requested name.
        name: String,
    },
}
