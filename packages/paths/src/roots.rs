//! Combined root discovery.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use crate::TEMPLATES_DIR;
use crate::error::PathError;
use crate::project::find_project_root;
use crate::tool::{ToolRootSearch, absolute, find_tool_root};

/// The project root and the tool root of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roots {
    /// Root of the user's project.
    pub project_root: PathBuf,
    /// Root of the forgekit installation.
    pub tool_root: PathBuf,
}

impl Roots {
    /// Create roots from known directories.
    #[must_use]
    pub fn new(project_root: impl Into<PathBuf>, tool_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            tool_root: tool_root.into(),
        }
    }

    /// Directory holding the bundled templates.
    #[must_use]
    pub fn template_root(&self) -> PathBuf {
        self.tool_root.join(TEMPLATES_DIR)
    }

    /// Base name of the project directory, used for name substitution.
    #[must_use]
    pub fn project_name(&self) -> String {
        self.project_root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Locate the project and tool roots.
///
/// When the discovered project root is the tool's own installation (running
/// from inside the forgekit tree), `cwd` is used as the project root instead.
/// Both returned roots are absolute.
///
/// # Arguments
///
/// * `start` - Directory to start the project root search from
/// * `cwd` - The process working directory
/// * `search` - Tool root search inputs
///
/// # Errors
///
/// * If the tool root cannot be found
pub fn locate(start: &Path, cwd: &Path, search: &ToolRootSearch) -> Result<Roots, PathError> {
    let project_root = absolute(&find_project_root(start));
    let tool_root = find_tool_root(&project_root, search)?;

    let project_root = if project_root == tool_root {
        log::debug!(
            "Project root is the tool root, falling back to {}",
            cwd.display()
        );
        absolute(cwd)
    } else {
        project_root
    };

    Ok(Roots {
        project_root,
        tool_root,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_locate_project_inside_tool_tree_uses_cwd() {
        let tool = TempDir::new().unwrap();
        fs::write(tool.path().join("package.json"), r#"{"name": "forgekit"}"#).unwrap();
        let cwd = tool.path().join("packages/cli");
        fs::create_dir_all(&cwd).unwrap();

        let roots = locate(&cwd, &cwd, &ToolRootSearch::default()).unwrap();

        assert_eq!(roots.tool_root, tool.path());
        assert_eq!(roots.project_root, cwd);
    }

    #[test]
    fn test_locate_regular_project() {
        let tool = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("package.json"), r#"{"name": "app"}"#).unwrap();
        let nested = project.path().join("src");
        fs::create_dir_all(&nested).unwrap();

        let search = ToolRootSearch {
            home_override: Some(tool.path().to_path_buf()),
            ..Default::default()
        };
        let roots = locate(&nested, &nested, &search).unwrap();

        assert_eq!(roots.project_root, project.path());
        assert_eq!(roots.tool_root, tool.path());
        assert_eq!(roots.template_root(), tool.path().join("templates"));
    }

    #[test]
    fn test_project_name() {
        let roots = Roots::new("/work/my-lib", "/opt/forgekit");
        assert_eq!(roots.project_name(), "my-lib");
    }
}
