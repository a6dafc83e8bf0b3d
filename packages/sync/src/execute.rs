//! Plan execution: remove, copy, then mutate each planned entry in order.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use forgekit_catalog::Catalog;
use forgekit_copy::{
    CopyError, CopyResult, append_line, copy_path, list_files, remove_path, replace_in_file,
    write_new_file,
};
use forgekit_paths::Roots;

use crate::error::{Phase, SyncError};
use crate::plan::{CopyContent, CopyPlan, PlannedCopy, SyncRequest, plan_sync};
use crate::{PLACEHOLDER_TOKEN, TEST_REGISTRY_LINE};

/// A mutation that failed without failing the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncWarning {
    /// The file the mutation was applied to.
    pub path: PathBuf,
    /// What went wrong.
    pub message: String,
}

impl std::fmt::Display for SyncWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Outcome of a synchronization run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Every copied destination (absolute), in plan order.
    pub copied: Vec<PathBuf>,
    /// Non-fatal mutation failures.
    pub warnings: Vec<SyncWarning>,
}

/// Execute a plan.
///
/// Entries are handled in plan order. For each: the existing destination is
/// removed when planned, the content is copied, then the registry line is
/// appended (test mode only) and the placeholder is substituted. A failed
/// substitution becomes a warning; any other failure stops the run.
///
/// # Arguments
///
/// * `plan` - The plan from [`plan_sync`]
/// * `project_name` - Replacement for the placeholder token
/// * `test_mode` - Whether to inject the test registry line
///
/// # Errors
///
/// * If removing, copying or appending fails; the error carries the
///   destinations copied before the failure
pub fn execute_plan(
    plan: &CopyPlan,
    project_name: &str,
    test_mode: bool,
) -> Result<SyncReport, SyncError> {
    log::info!("Running {} ({} entries)", plan.operation, plan.entries.len());

    let mut report = SyncReport::default();

    for entry in &plan.entries {
        if let Some(reason) = entry.skip {
            log::trace!("Skipped {} ({reason})", entry.destination.display());
            continue;
        }

        if !copy_entry(entry).map_err(|e| fs_error(e, entry, Phase::Copying, &report))? {
            continue;
        }
        report.copied.push(entry.destination.clone());

        if entry.mutations.inject_test_registry && test_mode {
            append_line(&entry.destination, TEST_REGISTRY_LINE)
                .map_err(|e| fs_error(e, entry, Phase::Mutating, &report))?;
            log::debug!("Injected test registry into {}", entry.destination.display());
        }

        if entry.mutations.substitute_name {
            substitute_name(&entry.destination, project_name, &mut report.warnings);
        }
    }

    log::info!(
        "Copied {} files ({} warnings)",
        report.copied.len(),
        report.warnings.len()
    );

    Ok(report)
}

/// Plan and execute in one call.
///
/// # Errors
///
/// * As [`plan_sync`] and [`execute_plan`]
pub fn synchronize(
    catalog: &Catalog,
    roots: &Roots,
    request: &SyncRequest,
) -> Result<SyncReport, SyncError> {
    let plan = plan_sync(catalog, roots, request)?;
    execute_plan(&plan, &roots.project_name(), request.test_mode)
}

/// Returns whether the destination was written.
fn copy_entry(entry: &PlannedCopy) -> Result<bool, CopyError> {
    if entry.remove_first {
        remove_path(&entry.destination)?;
    }

    let result = match &entry.content {
        CopyContent::Template => copy_path(&entry.source, &entry.destination)?,
        CopyContent::Generated(text) => write_new_file(&entry.destination, text)?,
    };

    match result {
        CopyResult::Created { files_copied } => {
            log::trace!(
                "Copied {} ({files_copied} files)",
                entry.destination.display()
            );
            Ok(true)
        }
        CopyResult::Exists | CopyResult::SourceNotFound => {
            log::debug!(
                "Nothing copied to {} ({result:?})",
                entry.destination.display()
            );
            Ok(false)
        }
    }
}

fn substitute_name(destination: &Path, project_name: &str, warnings: &mut Vec<SyncWarning>) {
    let files = if destination.is_dir() {
        list_files(destination)
    } else {
        vec![destination.to_path_buf()]
    };

    for file in files {
        match replace_in_file(&file, PLACEHOLDER_TOKEN, project_name) {
            Ok(0) => {}
            Ok(count) => log::debug!("Substituted {count} placeholders in {}", file.display()),
            Err(CopyError::ReadError { io_error, .. })
                if io_error.kind() == ErrorKind::InvalidData =>
            {
                log::debug!("Skipping non-text file {}", file.display());
            }
            Err(e) => {
                log::warn!("Name substitution failed: {e}");
                warnings.push(SyncWarning {
                    path: file,
                    message: e.to_string(),
                });
            }
        }
    }
}

/// Failures are reported against the entry's destination; the source error
/// keeps the exact path that failed.
fn fs_error(
    error: CopyError,
    entry: &PlannedCopy,
    phase: Phase,
    report: &SyncReport,
) -> SyncError {
    SyncError::FileSystem {
        path: entry.destination.clone(),
        phase,
        source: error,
        copied: report.copied.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::SkipReason;
    use forgekit_catalog::{LifecycleOperation, Mutations};
    use std::fs;
    use tempfile::TempDir;

    fn entry(source: &Path, destination: &Path) -> PlannedCopy {
        PlannedCopy {
            name: "entry".to_string(),
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            content: CopyContent::Template,
            mutations: Mutations::default(),
            remove_first: false,
            skip: None,
        }
    }

    fn plan(entries: Vec<PlannedCopy>) -> CopyPlan {
        CopyPlan {
            operation: LifecycleOperation::Init,
            entries,
        }
    }

    #[test]
    fn test_copies_in_plan_order() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("templates");
        let dst = temp.path().join("project");
        fs::create_dir_all(src.join("dir")).unwrap();
        fs::write(src.join("b.txt"), "b").unwrap();
        fs::write(src.join("dir/a.txt"), "a").unwrap();

        let report = execute_plan(
            &plan(vec![
                entry(&src.join("b.txt"), &dst.join("b.txt")),
                entry(&src.join("dir"), &dst.join("dir")),
            ]),
            "project",
            false,
        )
        .unwrap();

        assert_eq!(report.copied, vec![dst.join("b.txt"), dst.join("dir")]);
        assert_eq!(fs::read_to_string(dst.join("dir/a.txt")).unwrap(), "a");
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_skipped_entries_are_not_reported() {
        let temp = TempDir::new().unwrap();
        let existing = temp.path().join("existing.txt");
        fs::write(&existing, "keep").unwrap();

        let mut skipped = entry(&temp.path().join("template.txt"), &existing);
        skipped.skip = Some(SkipReason::DestinationExists);

        let report = execute_plan(&plan(vec![skipped]), "project", false).unwrap();

        assert!(report.copied.is_empty());
        assert_eq!(fs::read_to_string(&existing).unwrap(), "keep");
    }

    #[test]
    fn test_remove_first_replaces_directory() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src-template");
        let dst = temp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dst).unwrap();
        fs::write(src.join("index.ts"), "template").unwrap();
        fs::write(dst.join("stale.ts"), "stale").unwrap();

        let mut replace = entry(&src, &dst);
        replace.remove_first = true;

        let report = execute_plan(&plan(vec![replace]), "project", false).unwrap();

        assert_eq!(report.copied, vec![dst.clone()]);
        assert!(!dst.join("stale.ts").exists());
        assert_eq!(fs::read_to_string(dst.join("index.ts")).unwrap(), "template");
    }

    #[test]
    fn test_generated_content_is_written() {
        let temp = TempDir::new().unwrap();
        let dst = temp.path().join("tsconfig.json");

        let mut generated = entry(&temp.path().join("bundled.json"), &dst);
        generated.content = CopyContent::Generated("{\"extends\": \"x\"}\n".to_string());

        execute_plan(&plan(vec![generated]), "project", false).unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), "{\"extends\": \"x\"}\n");
    }

    #[test]
    fn test_name_substitution_in_directory() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("template");
        let dst = temp.path().join("out");
        fs::create_dir_all(src.join("nested")).unwrap();
        fs::write(src.join("a.ts"), "export const name = '{{PROJECT_NAME}}';").unwrap();
        fs::write(src.join("nested/b.md"), "{{PROJECT_NAME}} and {{PROJECT_NAME}}").unwrap();
        fs::write(src.join("logo.bin"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let mut substituted = entry(&src, &dst);
        substituted.mutations = Mutations::NAME;

        let report = execute_plan(&plan(vec![substituted]), "my-lib", false).unwrap();

        assert_eq!(
            fs::read_to_string(dst.join("a.ts")).unwrap(),
            "export const name = 'my-lib';"
        );
        assert_eq!(
            fs::read_to_string(dst.join("nested/b.md")).unwrap(),
            "my-lib and my-lib"
        );
        assert_eq!(fs::read(dst.join("logo.bin")).unwrap(), vec![0xff, 0xfe, 0x00, 0x80]);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_registry_injection_only_in_test_mode() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("npmrc");
        fs::write(&src, "save-exact=true\n").unwrap();

        let mut normal = entry(&src, &temp.path().join("normal/.npmrc"));
        normal.mutations = Mutations::REGISTRY;
        let mut test = entry(&src, &temp.path().join("test/.npmrc"));
        test.mutations = Mutations::REGISTRY;

        execute_plan(&plan(vec![normal]), "p", false).unwrap();
        execute_plan(&plan(vec![test]), "p", true).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("normal/.npmrc")).unwrap(),
            "save-exact=true\n"
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("test/.npmrc")).unwrap(),
            format!("save-exact=true\n{TEST_REGISTRY_LINE}\n")
        );
    }

    #[test]
    fn test_failure_reports_files_copied_so_far() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("file.txt");
        fs::write(&src, "x").unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let first = temp.path().join("ok/file.txt");
        let second = blocker.join("sub/file.txt");
        let error = execute_plan(
            &plan(vec![entry(&src, &first), entry(&src, &second)]),
            "p",
            false,
        )
        .unwrap_err();

        let SyncError::FileSystem { path, phase, .. } = &error else {
            panic!("expected a file system error, got {error:?}");
        };
        assert_eq!(*phase, Phase::Copying);
        assert_eq!(path, &second);
        assert_eq!(error.copied(), &[first.clone()]);
        assert!(first.exists());
    }

    #[test]
    fn test_mutation_failure_is_reported_against_destination() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("npmrc");
        fs::create_dir_all(&src).unwrap();
        let dst = temp.path().join("project/.npmrc");

        let mut registry = entry(&src, &dst);
        registry.mutations = Mutations::REGISTRY;

        let error = execute_plan(&plan(vec![registry]), "p", true).unwrap_err();

        let SyncError::FileSystem { path, phase, .. } = &error else {
            panic!("expected a file system error, got {error:?}");
        };
        assert_eq!(*phase, Phase::Mutating);
        assert_eq!(path, &dst);
        assert_eq!(error.copied(), &[dst.clone()]);
    }
}
