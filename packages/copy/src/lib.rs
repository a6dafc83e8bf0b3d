//! File copying and in-place text edits.
//!
//! This crate provides the filesystem primitives forgekit's synchronizer is
//! built on:
//!
//! * Recursive copying of files and directory trees, never onto an existing target
//! * Copy-on-write support via `reflink-copy` (APFS, Btrfs, `ReFS`)
//! * Recursive removal of files and directories
//! * Whole-file text replacement and single-line appends
//! * Ordered file listing using `jwalk`
//!
//! All operations run on the calling thread.
//!
//! # Example
//!
//! ```rust,ignore
//! use forgekit_copy::{copy_path, replace_in_file};
//!
//! copy_path(&template, &destination)?;
//! replace_in_file(&destination, "{{PROJECT_NAME}}", "my-lib")?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod copy;
mod error;
mod list;
mod mutate;

pub use copy::{CopyResult, copy_directory, copy_file, copy_path, remove_path, write_new_file};
pub use error::CopyError;
pub use list::list_files;
pub use mutate::{append_line, replace_in_file};
