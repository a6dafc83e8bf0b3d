use std::fs;
use std::path::{Path, PathBuf};

use forgekit_catalog::{Catalog, LifecycleOperation, ProjectType};
use forgekit_paths::Roots;
use forgekit_sync::{
    PLACEHOLDER_TOKEN, SyncError, SyncRequest, TEST_REGISTRY_LINE, plan_sync, synchronize,
};
use tempfile::TempDir;

fn tool_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn project(parent: &TempDir, name: &str) -> Roots {
    Roots::new(parent.path().join(name), tool_root())
}

fn init(roots: &Roots, project_type: ProjectType, test_mode: bool) -> Vec<PathBuf> {
    let request = SyncRequest {
        test_mode,
        ..SyncRequest::new(LifecycleOperation::Init, project_type)
    };
    synchronize(&Catalog::new().unwrap(), roots, &request)
        .unwrap()
        .copied
}

fn eject(roots: &Roots, items: &[&str], overwrite: bool) -> Result<Vec<PathBuf>, SyncError> {
    let request = SyncRequest {
        overwrite,
        items: items.iter().map(ToString::to_string).collect(),
        ..SyncRequest::new(LifecycleOperation::Eject, ProjectType::Library)
    };
    synchronize(&Catalog::new().unwrap(), roots, &request).map(|r| r.copied)
}

fn relative(roots: &Roots, copied: &[PathBuf]) -> Vec<String> {
    copied
        .iter()
        .map(|p| {
            p.strip_prefix(&roots.project_root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn init_library_copies_init_files_in_declared_order() {
    let parent = TempDir::new().unwrap();
    let roots = project(&parent, "my-lib");

    let copied = init(&roots, ProjectType::Library, false);

    assert_eq!(
        relative(&roots, &copied),
        vec![
            "LICENSE",
            "README.md",
            ".editorconfig",
            ".gitignore",
            ".npmrc",
            ".github/workflows/ci.yml",
            "package.json",
            "src",
            "test",
        ]
    );
    assert!(copied.iter().all(|p| p.is_absolute()));
    assert!(roots.project_root.join("src/index.ts").is_file());
    assert!(!roots.project_root.join("rollup.config.mjs").exists());
    assert!(!roots.project_root.join("tsconfig.json").exists());
}

#[test]
fn init_substitutes_project_name() {
    let parent = TempDir::new().unwrap();
    let roots = project(&parent, "my-lib");

    init(&roots, ProjectType::Library, false);

    let manifest: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(roots.project_root.join("package.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(manifest["name"], "my-lib");
    assert_eq!(manifest["forgekit"]["type"], "library");

    for file in ["package.json", "README.md", "LICENSE", "src/index.ts"] {
        let content = fs::read_to_string(roots.project_root.join(file)).unwrap();
        assert!(!content.contains(PLACEHOLDER_TOKEN), "{file} still has the token");
        assert!(content.contains("my-lib"), "{file} lacks the project name");
    }
}

#[test]
fn init_non_code_copies_only_shared_files_and_manifest() {
    let parent = TempDir::new().unwrap();
    let roots = project(&parent, "notes");

    let copied = init(&roots, ProjectType::NonCode, false);

    let names = relative(&roots, &copied);
    assert!(names.contains(&"package.json".to_string()));
    assert!(!names.contains(&"src".to_string()));
    assert!(!names.contains(&"test".to_string()));
}

#[test]
fn init_in_test_mode_appends_registry_once() {
    let parent = TempDir::new().unwrap();
    let roots = project(&parent, "my-lib");

    init(&roots, ProjectType::Library, true);

    let npmrc = fs::read_to_string(roots.project_root.join(".npmrc")).unwrap();
    assert!(npmrc.ends_with(&format!("{TEST_REGISTRY_LINE}\n")));
    assert_eq!(npmrc.matches(TEST_REGISTRY_LINE).count(), 1);
}

#[test]
fn init_on_non_empty_directory_writes_nothing() {
    let parent = TempDir::new().unwrap();
    let roots = project(&parent, "busy");
    fs::create_dir_all(&roots.project_root).unwrap();
    fs::write(roots.project_root.join(".hidden"), "").unwrap();

    let result = synchronize(
        &Catalog::new().unwrap(),
        &roots,
        &SyncRequest::new(LifecycleOperation::Init, ProjectType::Library),
    );

    assert!(matches!(result, Err(SyncError::NonEmptyDirectory { .. })));
    assert_eq!(fs::read_dir(&roots.project_root).unwrap().count(), 1);
}

#[test]
fn eject_keeps_existing_local_file_without_force() {
    let parent = TempDir::new().unwrap();
    let roots = project(&parent, "my-lib");
    init(&roots, ProjectType::Library, false);
    fs::write(roots.project_root.join("rollup.config.mjs"), "// mine").unwrap();

    let copied = eject(&roots, &["rollup"], false).unwrap();

    assert!(copied.is_empty());
    assert_eq!(
        fs::read_to_string(roots.project_root.join("rollup.config.mjs")).unwrap(),
        "// mine"
    );
}

#[test]
fn eject_with_force_replaces_local_file() {
    let parent = TempDir::new().unwrap();
    let roots = project(&parent, "my-lib");
    init(&roots, ProjectType::Library, false);
    fs::write(roots.project_root.join("rollup.config.mjs"), "// mine").unwrap();

    let copied = eject(&roots, &["rollup"], true).unwrap();

    assert_eq!(relative(&roots, &copied), vec!["rollup.config.mjs"]);
    assert_eq!(
        fs::read_to_string(roots.project_root.join("rollup.config.mjs")).unwrap(),
        fs::read_to_string(tool_root().join("templates/library/rollup.config.mjs")).unwrap()
    );
}

#[test]
fn eject_everything_reports_in_declared_order() {
    let parent = TempDir::new().unwrap();
    let roots = project(&parent, "my-lib");
    init(&roots, ProjectType::Library, false);

    let copied = eject(&roots, &[], false).unwrap();

    assert_eq!(
        relative(&roots, &copied),
        vec![
            ".prettierrc.json",
            "eslint.config.mjs",
            "tsconfig.json",
            "tsconfig.test.json",
            "rollup.config.mjs",
            "jest.config.mjs",
            "typedoc.json",
        ]
    );

    let tsconfig: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(roots.project_root.join("tsconfig.json")).unwrap(),
    )
    .unwrap();
    let extends = tsconfig["extends"].as_str().unwrap();
    assert!(extends.ends_with("templates/library/tsconfig.json"));
}

#[test]
fn update_without_manifest_fails_before_writing() {
    let parent = TempDir::new().unwrap();
    let roots = project(&parent, "empty");
    fs::create_dir_all(&roots.project_root).unwrap();

    let result = plan_sync(
        &Catalog::new().unwrap(),
        &roots,
        &SyncRequest::new(LifecycleOperation::Update, ProjectType::Library),
    );

    assert!(matches!(result, Err(SyncError::NotAProjectRoot { .. })));
    assert_eq!(fs::read_dir(&roots.project_root).unwrap().count(), 0);
}

#[test]
fn update_refreshes_shared_files_only_with_force() {
    let parent = TempDir::new().unwrap();
    let roots = project(&parent, "my-lib");
    init(&roots, ProjectType::Library, false);
    fs::write(roots.project_root.join(".gitignore"), "custom\n").unwrap();

    let request = SyncRequest::new(LifecycleOperation::Update, ProjectType::Library);
    let report = synchronize(&Catalog::new().unwrap(), &roots, &request).unwrap();
    assert!(report.copied.is_empty());
    assert_eq!(
        fs::read_to_string(roots.project_root.join(".gitignore")).unwrap(),
        "custom\n"
    );

    let forced = SyncRequest {
        overwrite: true,
        ..request
    };
    let report = synchronize(&Catalog::new().unwrap(), &roots, &forced).unwrap();
    assert_eq!(
        relative(&roots, &report.copied),
        vec![".editorconfig", ".gitignore", ".github/workflows/ci.yml"]
    );
    assert_ne!(
        fs::read_to_string(roots.project_root.join(".gitignore")).unwrap(),
        "custom\n"
    );
}
