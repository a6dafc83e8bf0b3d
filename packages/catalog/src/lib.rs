//! Project type catalog for forgekit.
//!
//! This crate describes every file forgekit knows how to place into a user's
//! project and decides where build-tool configuration lives at run time:
//!
//! * [`FileDefinition`], a closed set of plain, overridable and generatable files
//! * [`ProjectType`] and the per-type [`ProjectTypeDefinition`] built from a
//!   common base plus validated overrides
//! * [`ToolingResolution`], the local-over-template lookup of tooling files
//!
//! # Example
//!
//! ```rust,ignore
//! use forgekit_catalog::{Catalog, LifecycleOperation, ProjectType};
//!
//! let catalog = Catalog::new()?;
//! for file in catalog.filter_by_lifecycle(ProjectType::Library, LifecycleOperation::Init) {
//!     println!("{}", file.name());
//! }
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod catalog;
mod defaults;
mod definition;
mod error;
mod project_type;
mod resolver;

pub use catalog::{Catalog, ProjectTypeDefinition, build_project_type};
pub use defaults::{base_definitions, overrides_for};
pub use definition::{
    FileDefinition, FileLocation, GeneratableFile, Generator, Lifecycle, LifecycleOperation,
    Mutations, PlainFile, ToolingFile,
};
pub use error::CatalogError;
pub use project_type::ProjectType;
pub use resolver::{Origin, ResolvedPath, ToolingResolution, resolve};
