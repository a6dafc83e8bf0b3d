//! Static table of supported package managers.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;

use thiserror::Error;

/// A supported package manager.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PackageManager {
    /// npm, the default.
    #[default]
    Npm,
    /// Yarn (classic and berry).
    Yarn,
    /// pnpm.
    Pnpm,
    /// Bun.
    Bun,
}

/// Where a package manager keeps globally installed packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalRoot {
    /// Ask the manager; the printed directory is joined with `suffix` when set.
    Command {
        /// Program and arguments.
        args: &'static [&'static str],
        /// Folder appended to the printed path.
        suffix: Option<&'static str>,
    },
    /// Fixed location relative to the user's home directory.
    HomeRelative(&'static str),
}

/// Static description of a package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageManagerInfo {
    /// Canonical command name.
    pub command: &'static str,
    /// Command used to install dependencies.
    pub install: &'static [&'static str],
    /// Prefix used to execute a package binary.
    pub exec: &'static [&'static str],
    /// Folders searched for installed modules, relative to a root.
    pub module_folders: &'static [&'static str],
    /// Folders searched for package binaries, relative to a root.
    pub binary_folders: &'static [&'static str],
    /// How to find the global package folder.
    pub global_root: GlobalRoot,
}

const NPM: PackageManagerInfo = PackageManagerInfo {
    command: "npm",
    install: &["npm", "install"],
    exec: &["npx"],
    module_folders: &["node_modules"],
    binary_folders: &["node_modules/.bin"],
    global_root: GlobalRoot::Command {
        args: &["npm", "root", "-g"],
        suffix: None,
    },
};

const YARN: PackageManagerInfo = PackageManagerInfo {
    command: "yarn",
    install: &["yarn", "install"],
    exec: &["yarn", "exec"],
    module_folders: &["node_modules"],
    binary_folders: &["node_modules/.bin"],
    global_root: GlobalRoot::Command {
        args: &["yarn", "global", "dir"],
        suffix: Some("node_modules"),
    },
};

const PNPM: PackageManagerInfo = PackageManagerInfo {
    command: "pnpm",
    install: &["pnpm", "install"],
    exec: &["pnpm", "exec"],
    module_folders: &["node_modules", "node_modules/.pnpm/node_modules"],
    binary_folders: &["node_modules/.bin"],
    global_root: GlobalRoot::Command {
        args: &["pnpm", "root", "-g"],
        suffix: None,
    },
};

const BUN: PackageManagerInfo = PackageManagerInfo {
    command: "bun",
    install: &["bun", "install"],
    exec: &["bunx"],
    module_folders: &["node_modules"],
    binary_folders: &["node_modules/.bin"],
    global_root: GlobalRoot::HomeRelative(".bun/install/global/node_modules"),
};

/// Error returned when parsing an unknown package manager identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown package manager: {0}")]
pub struct UnknownPackageManager(pub String);

impl PackageManager {
    /// Every supported manager, in detection priority order.
    pub const ALL: [Self; 4] = [Self::Npm, Self::Yarn, Self::Pnpm, Self::Bun];

    /// Static description of this manager.
    #[must_use]
    pub const fn info(self) -> &'static PackageManagerInfo {
        match self {
            Self::Npm => &NPM,
            Self::Yarn => &YARN,
            Self::Pnpm => &PNPM,
            Self::Bun => &BUN,
        }
    }

    /// Canonical command name.
    #[must_use]
    pub const fn command(self) -> &'static str {
        self.info().command
    }

    /// Locate the directory holding globally installed packages.
    ///
    /// Returns `None` when the manager is not installed or prints nothing usable.
    #[must_use]
    pub fn global_root(self) -> Option<PathBuf> {
        match self.info().global_root {
            GlobalRoot::Command { args, suffix } => {
                let (program, rest) = args.split_first()?;
                log::debug!("Querying global root: {}", args.join(" "));

                let output = Command::new(program).args(rest).output().ok()?;
                if !output.status.success() {
                    log::debug!("{program} exited with {}", output.status);
                    return None;
                }

                let printed = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if printed.is_empty() {
                    return None;
                }

                let root = PathBuf::from(printed);
                Some(suffix.map_or_else(|| root.clone(), |s| root.join(s)))
            }
            GlobalRoot::HomeRelative(relative) => dirs::home_dir().map(|home| home.join(relative)),
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command())
    }
}

impl FromStr for PackageManager {
    type Err = UnknownPackageManager;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|pm| pm.command() == wanted)
            .ok_or_else(|| UnknownPackageManager(s.to_string()))
    }
}

/// Find a package binary under the given roots.
///
/// Each root is searched with every manager's binary folders, roots first, so a
/// project-local binary wins over one bundled with the tool.
#[must_use]
pub fn find_executable(roots: &[&Path], bin: &str) -> Option<PathBuf> {
    let mut folders: Vec<&str> = Vec::new();
    for pm in PackageManager::ALL {
        for folder in pm.info().binary_folders {
            if !folders.contains(folder) {
                folders.push(folder);
            }
        }
    }

    for root in roots {
        for folder in &folders {
            let dir = root.join(folder);
            for name in executable_names(bin) {
                let candidate = dir.join(&name);
                if candidate.is_file() {
                    log::debug!("Resolved {bin} to {}", candidate.display());
                    return Some(candidate);
                }
            }
        }
    }

    log::debug!("Executable {bin} not found under {} roots", roots.len());
    None
}

#[cfg(windows)]
fn executable_names(bin: &str) -> Vec<String> {
    vec![format!("{bin}.cmd"), format!("{bin}.exe"), bin.to_string()]
}

#[cfg(not(windows))]
fn executable_names(bin: &str) -> Vec<String> {
    vec![bin.to_string()]
}
