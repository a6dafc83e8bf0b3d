//! Synchronization planning: check preconditions and decide every copy
//! without touching the filesystem.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::{Path, PathBuf};

use forgekit_catalog::{Catalog, LifecycleOperation, Mutations, ProjectType};
use forgekit_copy::CopyError;
use forgekit_paths::{MANIFEST_FILE, Roots};

use crate::error::{Phase, SyncError};

/// What to synchronize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequest {
    /// Lifecycle operation.
    pub operation: LifecycleOperation,
    /// Project type whose definitions are copied.
    pub project_type: ProjectType,
    /// Replace existing destinations instead of skipping them.
    pub overwrite: bool,
    /// Inject the local test registry where a definition asks for it.
    pub test_mode: bool,
    /// Definition names to narrow the operation to; empty means all.
    pub items: Vec<String>,
}

impl SyncRequest {
    /// A request for every definition of `operation`, without overwrite.
    #[must_use]
    pub const fn new(operation: LifecycleOperation, project_type: ProjectType) -> Self {
        Self {
            operation,
            project_type,
            overwrite: false,
            test_mode: false,
            items: Vec::new(),
        }
    }
}

/// Why a planned copy will not happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The bundled template does not exist.
    TemplateMissing,
    /// The destination exists and overwrite is off.
    DestinationExists,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TemplateMissing => write!(f, "template missing"),
            Self::DestinationExists => write!(f, "exists"),
        }
    }
}

/// What gets written to the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyContent {
    /// The template file or directory, copied as is.
    Template,
    /// Generated text.
    Generated(String),
}

/// One source to destination copy.
#[derive(Debug, Clone)]
pub struct PlannedCopy {
    /// Definition the copy belongs to.
    pub name: String,
    /// Template path (absolute).
    pub source: PathBuf,
    /// Destination path (absolute).
    pub destination: PathBuf,
    /// What is written.
    pub content: CopyContent,
    /// Edits applied after copying.
    pub mutations: Mutations,
    /// Whether the existing destination is removed before copying.
    pub remove_first: bool,
    /// Set when the copy will be skipped.
    pub skip: Option<SkipReason>,
}

impl PlannedCopy {
    /// Whether the copy will be skipped.
    #[must_use]
    pub const fn will_skip(&self) -> bool {
        self.skip.is_some()
    }
}

/// Every copy of one synchronization run, in execution order.
#[derive(Debug, Clone)]
pub struct CopyPlan {
    /// The operation planned for.
    pub operation: LifecycleOperation,
    /// Planned copies in declared order.
    pub entries: Vec<PlannedCopy>,
}

impl CopyPlan {
    /// Entries that will actually be copied.
    pub fn pending(&self) -> impl Iterator<Item = &PlannedCopy> {
        self.entries.iter().filter(|e| !e.will_skip())
    }

    /// Entries that will be skipped.
    pub fn skipped(&self) -> impl Iterator<Item = &PlannedCopy> {
        self.entries.iter().filter(|e| e.will_skip())
    }
}

/// Plan a synchronization run.
///
/// `init` requires the project directory to be missing or empty (hidden
/// entries count). `update` and `eject` require a `package.json` at the
/// project root. No files are written.
///
/// # Arguments
///
/// * `catalog` - The project type catalog
/// * `roots` - Project and tool roots
/// * `request` - What to synchronize
///
/// # Errors
///
/// * If the precondition of the operation does not hold
/// * If the project type or an item is unknown to the catalog
/// * If the project directory cannot be read
pub fn plan_sync(
    catalog: &Catalog,
    roots: &Roots,
    request: &SyncRequest,
) -> Result<CopyPlan, SyncError> {
    let project_root = &roots.project_root;

    match request.operation {
        LifecycleOperation::Init => ensure_empty(project_root)?,
        LifecycleOperation::Update | LifecycleOperation::Eject => {
            ensure_project_root(project_root)?;
        }
    }

    let definitions = catalog.select(request.project_type, request.operation, &request.items)?;
    let template_root = roots.template_root();

    let mut entries = Vec::new();
    for definition in definitions {
        for location in definition.locations() {
            let source = template_root.join(&location.template);
            let destination = project_root.join(&location.destination);
            let destination_exists = destination.exists() || destination.is_symlink();

            let skip = if !source.exists() {
                Some(SkipReason::TemplateMissing)
            } else if destination_exists && !request.overwrite {
                Some(SkipReason::DestinationExists)
            } else {
                None
            };

            let content = match definition.generator() {
                Some(generate) if skip.is_none() => CopyContent::Generated(generate(&source)),
                _ => CopyContent::Template,
            };

            if let Some(reason) = skip {
                log::debug!("Skipping {} ({reason})", destination.display());
            }

            entries.push(PlannedCopy {
                name: definition.name().to_string(),
                remove_first: skip.is_none() && destination_exists,
                source,
                destination,
                content,
                mutations: definition.mutations(),
                skip,
            });
        }
    }

    log::debug!(
        "Planned {} copies for {} ({} skipped)",
        entries.len(),
        request.operation,
        entries.iter().filter(|e| e.will_skip()).count()
    );

    Ok(CopyPlan {
        operation: request.operation,
        entries,
    })
}

fn ensure_empty(dir: &Path) -> Result<(), SyncError> {
    if !dir.exists() {
        return Ok(());
    }

    if !dir.is_dir() {
        return Err(SyncError::NonEmptyDirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut entries = fs::read_dir(dir).map_err(|e| SyncError::FileSystem {
        path: dir.to_path_buf(),
        phase: Phase::Planning,
        source: CopyError::ReadError {
            path: dir.to_path_buf(),
            io_error: e,
        },
        copied: Vec::new(),
    })?;

    if entries.next().is_some() {
        return Err(SyncError::NonEmptyDirectory {
            path: dir.to_path_buf(),
        });
    }

    Ok(())
}

fn ensure_project_root(dir: &Path) -> Result<(), SyncError> {
    if dir.join(MANIFEST_FILE).is_file() {
        Ok(())
    } else {
        Err(SyncError::NotAProjectRoot {
            path: dir.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forgekit_catalog::CatalogError;
    use tempfile::TempDir;

    struct Fixture {
        project: TempDir,
        tool: TempDir,
        catalog: Catalog,
    }

    impl Fixture {
        fn new() -> Self {
            let tool = TempDir::new().unwrap();
            let templates = tool.path().join("templates");
            fs::create_dir_all(templates.join("common")).unwrap();
            fs::create_dir_all(templates.join("library/src")).unwrap();
            fs::write(templates.join("common/gitignore"), "node_modules\n").unwrap();
            fs::write(templates.join("common/README.md"), "# {{PROJECT_NAME}}\n").unwrap();
            fs::write(templates.join("library/package.json"), "{}").unwrap();
            fs::write(templates.join("library/src/index.ts"), "").unwrap();
            fs::write(templates.join("library/rollup.config.mjs"), "").unwrap();
            fs::write(templates.join("library/tsconfig.json"), "{}").unwrap();

            Self {
                project: TempDir::new().unwrap(),
                tool,
                catalog: Catalog::new().unwrap(),
            }
        }

        fn roots(&self) -> Roots {
            Roots::new(self.project.path(), self.tool.path())
        }

        fn plan(&self, request: &SyncRequest) -> Result<CopyPlan, SyncError> {
            plan_sync(&self.catalog, &self.roots(), request)
        }

        fn write_manifest(&self) {
            fs::write(self.project.path().join("package.json"), "{}").unwrap();
        }
    }

    fn eject(items: &[&str], overwrite: bool) -> SyncRequest {
        SyncRequest {
            overwrite,
            items: items.iter().map(ToString::to_string).collect(),
            ..SyncRequest::new(LifecycleOperation::Eject, ProjectType::Library)
        }
    }

    #[test]
    fn test_init_plan_in_declared_order() {
        let fixture = Fixture::new();
        let plan = fixture
            .plan(&SyncRequest::new(
                LifecycleOperation::Init,
                ProjectType::Library,
            ))
            .unwrap();

        let names: Vec<&str> = plan.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "license",
                "readme",
                "editorconfig",
                "gitignore",
                "npmrc",
                "ci",
                "package",
                "src",
                "test"
            ]
        );

        let pending: Vec<&str> = plan.pending().map(|e| e.name.as_str()).collect();
        assert_eq!(pending, vec!["readme", "gitignore", "package", "src"]);
        assert!(plan.skipped().all(|e| e.skip == Some(SkipReason::TemplateMissing)));
    }

    #[test]
    fn test_init_on_missing_directory_is_allowed() {
        let fixture = Fixture::new();
        let roots = Roots::new(fixture.project.path().join("new-lib"), fixture.tool.path());

        let plan = plan_sync(
            &fixture.catalog,
            &roots,
            &SyncRequest::new(LifecycleOperation::Init, ProjectType::Library),
        )
        .unwrap();

        assert!(plan.pending().count() > 0);
    }

    #[test]
    fn test_init_rejects_hidden_entry() {
        let fixture = Fixture::new();
        fs::write(fixture.project.path().join(".env"), "").unwrap();

        let result = fixture.plan(&SyncRequest::new(
            LifecycleOperation::Init,
            ProjectType::Library,
        ));

        assert!(matches!(result, Err(SyncError::NonEmptyDirectory { .. })));
    }

    #[test]
    fn test_update_requires_manifest() {
        let fixture = Fixture::new();

        let result = fixture.plan(&SyncRequest::new(
            LifecycleOperation::Update,
            ProjectType::Library,
        ));

        assert!(matches!(
            result,
            Err(SyncError::NotAProjectRoot { path }) if path == fixture.project.path()
        ));
    }

    #[test]
    fn test_existing_destination_is_skipped_without_overwrite() {
        let fixture = Fixture::new();
        fixture.write_manifest();
        fs::write(fixture.project.path().join("rollup.config.mjs"), "local").unwrap();

        let plan = fixture.plan(&eject(&["rollup"], false)).unwrap();

        assert_eq!(plan.entries.len(), 1);
        assert_eq!(plan.entries[0].skip, Some(SkipReason::DestinationExists));
        assert!(!plan.entries[0].remove_first);
    }

    #[test]
    fn test_existing_destination_is_removed_with_overwrite() {
        let fixture = Fixture::new();
        fixture.write_manifest();
        fs::write(fixture.project.path().join("rollup.config.mjs"), "local").unwrap();

        let plan = fixture.plan(&eject(&["rollup"], true)).unwrap();

        assert!(plan.entries[0].skip.is_none());
        assert!(plan.entries[0].remove_first);
    }

    #[test]
    fn test_generatable_definition_plans_generated_content() {
        let fixture = Fixture::new();
        fixture.write_manifest();

        let plan = fixture.plan(&eject(&["typescript"], false)).unwrap();

        assert_eq!(plan.entries.len(), 2);
        let CopyContent::Generated(text) = &plan.entries[0].content else {
            panic!("expected generated content");
        };
        assert!(text.contains("\"extends\""));
        assert!(text.contains("tsconfig.json"));
        assert_eq!(plan.entries[1].skip, Some(SkipReason::TemplateMissing));
        assert_eq!(plan.entries[1].content, CopyContent::Template);
    }

    #[test]
    fn test_unknown_item_is_rejected() {
        let fixture = Fixture::new();
        fixture.write_manifest();

        let result = fixture.plan(&eject(&["webpack"], false));

        assert!(matches!(
            result,
            Err(SyncError::Catalog(CatalogError::UnknownFile { .. }))
        ));
    }

    #[test]
    fn test_planning_writes_nothing() {
        let fixture = Fixture::new();
        fixture
            .plan(&SyncRequest::new(
                LifecycleOperation::Init,
                ProjectType::Library,
            ))
            .unwrap();

        assert_eq!(fs::read_dir(fixture.project.path()).unwrap().count(), 0);
    }
}
