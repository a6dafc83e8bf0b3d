//! Error types for path discovery.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while locating roots.
#[derive(Debug, Error)]
pub enum PathError {
    /// No strategy produced an existing tool installation.
    #[error(
        "Could not locate the forgekit installation (searched {} locations, set FORGEKIT_HOME to override)",
        searched.len()
    )]
    ToolRootNotFound {
        /// Every candidate that was checked, in order.
        searched: Vec<PathBuf>,
    },
}
