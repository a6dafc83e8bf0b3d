//! Error types for synchronization.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Step of a synchronization run a failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Checking preconditions and building the plan.
    Planning,
    /// Removing and copying files.
    Copying,
    /// Editing copied files.
    Mutating,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Planning => write!(f, "planning"),
            Self::Copying => write!(f, "copying"),
            Self::Mutating => write!(f, "mutating"),
        }
    }
}

/// Errors that can occur during synchronization.
#[derive(Debug, Error)]
pub enum SyncError {
    /// `init` targeted a directory that already has entries.
    #[error("Directory {} is not empty", path.display())]
    NonEmptyDirectory {
        /// The target directory.
        path: PathBuf,
    },

    /// `update` or `eject` targeted a directory without a manifest.
    #[error("No package.json found in {}", path.display())]
    NotAProjectRoot {
        /// The target directory.
        path: PathBuf,
    },

    /// A filesystem operation failed. Files copied before the failure are
    /// not rolled back.
    #[error("Filesystem error while {phase} {}: {source}", path.display())]
    FileSystem {
        /// Path the failure is about.
        path: PathBuf,
        /// Step the failure happened in.
        phase: Phase,
        /// The underlying copy error.
        #[source]
        source: forgekit_copy::CopyError,
        /// Destinations copied before the failure, in order.
        copied: Vec<PathBuf>,
    },

    /// Catalog error.
    #[error(transparent)]
    Catalog(#[from] forgekit_catalog::CatalogError),
}

impl SyncError {
    /// Destinations copied before the failure; empty for errors raised
    /// before any write.
    #[must_use]
    pub fn copied(&self) -> &[PathBuf] {
        match self {
            Self::FileSystem { copied, .. } => copied,
            _ => &[],
        }
    }
}
