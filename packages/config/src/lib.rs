//! Configuration for forgekit.
//!
//! This crate turns the three sources of settings into one resolved snapshot
//! and exposes it, together with the tooling file resolution, through
//! [`ConfigFacade`]:
//!
//! * Explicit arguments (command-line flags or API callers)
//! * The `"forgekit"` section of the project's `package.json`
//! * Built-in defaults (package manager detected from the environment)
//!
//! Each field is resolved independently, explicit first.
//!
//! # Example
//!
//! ```rust,ignore
//! use forgekit_config::{ConfigFacade, ExplicitArgs};
//!
//! let mut config = ConfigFacade::new(roots, catalog, hints);
//! config.init(ExplicitArgs::default())?;
//! if let Some(rollup) = config.tooling_path("rollup")? {
//!     println!("rollup config: {}", rollup.display());
//! }
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod environment;
mod error;
mod facade;
mod manifest;
mod types;

pub use environment::resolve_settings;
pub use error::ConfigError;
pub use facade::ConfigFacade;
pub use manifest::{load_manifest_settings, read_manifest};
pub use types::{Defaults, ExecutionSettings, ExplicitArgs, ManifestSettings};
