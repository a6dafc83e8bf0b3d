//! Terminal output formatting.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use colored::Colorize;

/// Prints user-facing output unless silenced. Errors always print.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    silent: bool,
}

impl Output {
    #[must_use]
    pub const fn new(silent: bool) -> Self {
        Self { silent }
    }

    /// Print a header message.
    pub fn header(self, message: &str) {
        if !self.silent {
            println!("\n{} {}\n", "🔨", message.bold());
        }
    }

    /// Print project info.
    pub fn project_info(self, project_root: &Path, project_type: &str, manager: &str) {
        if self.silent {
            return;
        }
        println!("Project: {}", project_root.display().to_string().cyan());
        println!("Type:    {}", project_type.yellow());
        println!("Manager: {}", manager.yellow());
        println!();
    }

    /// Print the copied files, relative to the project root.
    pub fn changed_files(self, project_root: &Path, files: &[PathBuf]) {
        if self.silent {
            return;
        }
        if files.is_empty() {
            println!("{} No files changed", "•".dimmed());
            return;
        }
        println!(
            "{} file{} changed:",
            files.len(),
            if files.len() == 1 { "" } else { "s" }
        );
        for file in files {
            let shown = file.strip_prefix(project_root).unwrap_or(file);
            println!("  {} {}", "✓".green(), shown.display());
        }
    }

    /// Print a command being run.
    pub fn command(self, cmd: &str) {
        if !self.silent {
            println!("  {} {}", "$".dimmed(), cmd);
        }
    }

    /// Print a hint about what to do next.
    pub fn next_step(self, cmd: &str) {
        if !self.silent {
            println!("\nNext: {}", cmd.cyan());
        }
    }

    /// Print success message.
    pub fn success(self, message: &str) {
        if !self.silent {
            println!("{} {}", "✅", message);
        }
    }

    /// Print a warning message.
    pub fn warning(self, message: &str) {
        if !self.silent {
            println!("{} {}", "Warning:".yellow().bold(), message);
        }
    }
}

/// Print error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

/// Print the files copied before a failure.
pub fn print_partial(project_root: &Path, files: &[PathBuf]) {
    if files.is_empty() {
        return;
    }
    eprintln!(
        "{} completed partially, these files were copied before the failure:",
        "Note:".yellow().bold()
    );
    for file in files {
        let shown = file.strip_prefix(project_root).unwrap_or(file);
        eprintln!("  {} {}", "•".dimmed(), shown.display());
    }
}
