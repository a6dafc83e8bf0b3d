//! Path discovery for forgekit.
//!
//! Locates the two directories every other forgekit component works against:
//!
//! * The project root, the nearest ancestor holding a `package.json`
//! * The tool root, the forgekit installation holding the bundled `templates/`
//!
//! # Example
//!
//! ```rust,ignore
//! use forgekit_paths::{ToolRootSearch, locate};
//!
//! let cwd = std::env::current_dir()?;
//! let roots = locate(&cwd, &cwd, &ToolRootSearch::from_env())?;
//! println!("templates at {}", roots.template_root().display());
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod project;
mod roots;
mod tool;

pub use error::PathError;
pub use project::{find_project_root, has_manifest, manifest_name};
pub use roots::{Roots, locate};
pub use tool::{ToolRootSearch, find_tool_root, is_tool_root};

/// File name of the project manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// The tool's own package name, also the manifest configuration key.
pub const TOOL_NAME: &str = "forgekit";

/// Environment variable that pins the tool root.
pub const TOOL_HOME_ENV: &str = "FORGEKIT_HOME";

/// Folder under the tool root holding the bundled templates.
pub const TEMPLATES_DIR: &str = "templates";
