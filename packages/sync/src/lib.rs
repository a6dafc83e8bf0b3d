//! Template synchronization for forgekit.
//!
//! Copies the files a project type declares for a lifecycle operation from
//! the bundled templates into a project:
//!
//! * Planning checks the preconditions and decides every copy up front
//! * Executing removes (with overwrite), copies, then mutates each entry
//!
//! Synchronization is not transactional. When a write fails midway the files
//! copied so far stay on disk and are reported in the error.
//!
//! # Example
//!
//! ```rust,ignore
//! use forgekit_sync::{SyncRequest, plan_sync, execute_plan};
//!
//! let plan = plan_sync(&catalog, &roots, &request)?;
//! for entry in plan.pending() {
//!     println!("will copy {}", entry.destination.display());
//! }
//! let report = execute_plan(&plan, &roots.project_name(), request.test_mode)?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod execute;
mod plan;

pub use error::{Phase, SyncError};
pub use execute::{SyncReport, SyncWarning, execute_plan, synchronize};
pub use plan::{CopyContent, CopyPlan, PlannedCopy, SkipReason, SyncRequest, plan_sync};

/// Token in template content replaced with the project name.
pub const PLACEHOLDER_TOKEN: &str = "{{PROJECT_NAME}}";

/// Line appended to the package manager config in test mode.
pub const TEST_REGISTRY_LINE: &str = "registry=http://localhost:4873/";
