//! CLI argument definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use forgekit_config::ExplicitArgs;

/// CLI arguments for forgekit.
#[derive(Debug, Parser)]
#[command(
    name = "forgekit",
    about = "Scaffold and build JavaScript and TypeScript libraries",
    version
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Project type (library, cli-library, react-library, non-code).
    #[arg(long = "type", global = true)]
    pub project_type: Option<String>,

    /// Package manager (npm, yarn, pnpm, bun).
    #[arg(long, global = true)]
    pub package_manager: Option<String>,

    /// Only print errors.
    #[arg(long, global = true)]
    pub silent: bool,

    /// Enable verbose logging.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Point the package manager at the local test registry.
    #[arg(long, global = true)]
    pub test: bool,

    /// Use absolute paths in task commands.
    #[arg(long, global = true)]
    pub use_full_paths: bool,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new project in a new directory.
    Create {
        /// Name of the project directory.
        name: String,
    },

    /// Initialize a project in the current directory.
    Init,

    /// Refresh shared configuration files in an existing project.
    Update(SyncArgs),

    /// Copy bundled tooling configuration into the project.
    Eject(SyncArgs),

    /// Run a task (lint, format, test, build, typecheck, docs).
    ///
    /// Everything after the task name goes to the task's tool, so forgekit
    /// flags must come first: `forgekit --silent run build`.
    Run {
        /// Task name.
        task: String,

        /// Extra arguments passed verbatim to the task's tool.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

/// Options of `update` and `eject`.
#[derive(Debug, Default, clap::Args)]
pub struct SyncArgs {
    /// Replace files that already exist.
    #[arg(long)]
    pub force: bool,

    /// Only handle these files (comma separated).
    #[arg(long, value_delimiter = ',')]
    pub items: Vec<String>,
}

impl Args {
    /// Settings given on the command line.
    ///
    /// Boolean flags only count when set, so the manifest can still turn
    /// them on.
    #[must_use]
    pub fn explicit(&self) -> ExplicitArgs {
        ExplicitArgs {
            project_type: self.project_type.clone(),
            package_manager: self.package_manager.clone(),
            debug: self.debug.then_some(true),
            test: self.test.then_some(true),
            use_full_paths: self.use_full_paths.then_some(true),
        }
    }
}
