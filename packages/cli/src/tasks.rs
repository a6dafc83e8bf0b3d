//! Task commands built from the resolved tooling files.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::str::FromStr;

use forgekit_config::{ConfigError, ConfigFacade};
use forgekit_package_manager::find_executable;
use thiserror::Error;

/// Errors raised while building or running a task.
#[derive(Debug, Error)]
pub enum TaskError {
    /// The task name is not known.
    #[error("Unknown task: {0} (expected lint, format, test, build, typecheck or docs)")]
    UnknownTask(String),

    /// The tooling file the task needs resolves nowhere.
    #[error("Task {task} needs the {file} configuration, which was found neither in the project nor in the bundled templates")]
    MissingToolingFile {
        /// The task.
        task: Task,
        /// Name of the tooling file definition.
        file: &'static str,
    },

    /// The task's tool could not be started.
    #[error("Failed to run {command}: {source}")]
    Spawn {
        /// The rendered command.
        command: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The task's tool exited unsuccessfully.
    #[error("{command} exited with {}", code.map_or_else(|| "a signal".to_string(), |c| format!("status {c}")))]
    Failed {
        /// The rendered command.
        command: String,
        /// Exit code, when there is one.
        code: Option<i32>,
    },

    /// Configuration error.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A runnable task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Lint,
    Format,
    Test,
    Build,
    Typecheck,
    Docs,
}

impl Task {
    /// Name of the tooling file definition the task reads.
    #[must_use]
    pub const fn tooling(self) -> &'static str {
        match self {
            Self::Lint => "eslint",
            Self::Format => "prettier",
            Self::Test => "jest",
            Self::Build => "rollup",
            Self::Typecheck => "typescript",
            Self::Docs => "typedoc",
        }
    }

    /// Package binary that runs the task.
    #[must_use]
    pub const fn binary(self) -> &'static str {
        match self {
            Self::Lint => "eslint",
            Self::Format => "prettier",
            Self::Test => "jest",
            Self::Build => "rollup",
            Self::Typecheck => "tsc",
            Self::Docs => "typedoc",
        }
    }

    fn arguments(self, config: String) -> Vec<String> {
        match self {
            Self::Lint => vec!["--config".into(), config, ".".into()],
            Self::Format => vec!["--config".into(), config, "--write".into(), ".".into()],
            Self::Test | Self::Build => vec!["--config".into(), config],
            Self::Typecheck => vec!["--noEmit".into(), "--project".into(), config],
            Self::Docs => vec!["--options".into(), config],
        }
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Lint => "lint",
            Self::Format => "format",
            Self::Test => "test",
            Self::Build => "build",
            Self::Typecheck => "typecheck",
            Self::Docs => "docs",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Task {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lint" => Ok(Self::Lint),
            "format" => Ok(Self::Format),
            "test" => Ok(Self::Test),
            "build" => Ok(Self::Build),
            "typecheck" => Ok(Self::Typecheck),
            "docs" => Ok(Self::Docs),
            _ => Err(TaskError::UnknownTask(s.to_string())),
        }
    }
}

/// A task command ready to spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCommand {
    /// Program to run.
    pub program: PathBuf,
    /// Program as shown to the user.
    pub display_program: String,
    /// Arguments.
    pub args: Vec<String>,
    /// Working directory.
    pub cwd: PathBuf,
}

impl std::fmt::Display for TaskCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_program)?;
        for arg in &self.args {
            if arg.contains(' ') {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Build the command of `task`.
///
/// The tool binary is looked up in the project's and then the tool's
/// dependency folders, falling back to `PATH`.
///
/// # Errors
///
/// * If the configuration is not initialized
/// * If the task's tooling file resolves nowhere
pub fn build_command(
    config: &ConfigFacade,
    task: Task,
    extra: &[String],
) -> Result<TaskCommand, TaskError> {
    let tooling = config
        .tooling_path(task.tooling())?
        .ok_or(TaskError::MissingToolingFile {
            task,
            file: task.tooling(),
        })?;

    let roots = config.roots();
    let lookup: [&Path; 2] = [&roots.project_root, &roots.tool_root];
    let (program, display_program) = match find_executable(&lookup, task.binary()) {
        Some(path) => {
            let shown = config.command_path(&path)?;
            (path, shown)
        }
        None => (PathBuf::from(task.binary()), task.binary().to_string()),
    };

    let mut args = task.arguments(config.command_path(tooling)?);
    args.extend(extra.iter().cloned());

    let command = TaskCommand {
        program,
        display_program,
        args,
        cwd: roots.project_root.clone(),
    };

    log::debug!("Built {task} command: {command}");

    Ok(command)
}

/// Spawn `command` with inherited stdio and wait for it.
///
/// # Errors
///
/// * If the program cannot be started
/// * If it exits unsuccessfully
pub fn run_command(command: &TaskCommand) -> Result<(), TaskError> {
    let status = Command::new(&command.program)
        .args(&command.args)
        .current_dir(&command.cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| TaskError::Spawn {
            command: command.to_string(),
            source: e,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(TaskError::Failed {
            command: command.to_string(),
            code: status.code(),
        })
    }
}
