//! Package manager registry for forgekit.
//!
//! This crate provides the static table of supported JavaScript package
//! managers and the logic used to figure out which one is in use:
//!
//! * Install, exec and global-root commands per manager
//! * Module and binary lookup folders
//! * Detection from environment hints (`npm_config_user_agent`, global binary location)
//! * Executable lookup inside project and tool dependency folders
//!
//! # Example
//!
//! ```rust,ignore
//! use forgekit_package_manager::{EnvHints, detect_in_use};
//!
//! let manager = detect_in_use(&EnvHints::from_env("forgekit"));
//! println!("installing with: {}", manager.info().install.join(" "));
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod detect;
mod registry;

pub use detect::{EnvHints, USER_AGENT_ENV, detect_in_use, infer_from_path, parse_user_agent};
pub use registry::{
    GlobalRoot, PackageManager, PackageManagerInfo, UnknownPackageManager, find_executable,
};
