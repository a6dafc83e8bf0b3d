//! Built-in file definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use crate::definition::{FileDefinition, Lifecycle, Mutations};
use crate::project_type::ProjectType;

/// Definitions shared by every project type, in declared order.
///
/// Files that only make sense for some project types are declared here as
/// excluded placeholders and replaced by [`overrides_for`].
#[must_use]
pub fn base_definitions() -> Vec<FileDefinition> {
    vec![
        FileDefinition::plain("license", &[("common/LICENSE", "LICENSE")])
            .with_lifecycle(Lifecycle::INIT)
            .with_mutations(Mutations::NAME),
        FileDefinition::plain("readme", &[("common/README.md", "README.md")])
            .with_lifecycle(Lifecycle::INIT)
            .with_mutations(Mutations::NAME),
        FileDefinition::plain("editorconfig", &[("common/editorconfig", ".editorconfig")])
            .with_lifecycle(Lifecycle::INIT_UPDATE),
        FileDefinition::plain("gitignore", &[("common/gitignore", ".gitignore")])
            .with_lifecycle(Lifecycle::INIT_UPDATE),
        FileDefinition::plain("npmrc", &[("common/npmrc", ".npmrc")])
            .with_lifecycle(Lifecycle::INIT)
            .with_mutations(Mutations::REGISTRY),
        FileDefinition::plain(
            "ci",
            &[("common/github/workflows/ci.yml", ".github/workflows/ci.yml")],
        )
        .with_lifecycle(Lifecycle::INIT_UPDATE),
        FileDefinition::excluded("package"),
        FileDefinition::excluded("src"),
        FileDefinition::excluded("test"),
        FileDefinition::tooling("prettier", &[("common/prettierrc.json", ".prettierrc.json")])
            .with_lifecycle(Lifecycle::EJECT),
        FileDefinition::tooling("eslint", &[("common/eslint.config.mjs", "eslint.config.mjs")])
            .with_lifecycle(Lifecycle::EJECT),
        FileDefinition::excluded("typescript"),
        FileDefinition::excluded("rollup"),
        FileDefinition::excluded("jest"),
        FileDefinition::tooling("typedoc", &[("common/typedoc.json", "typedoc.json")])
            .with_lifecycle(Lifecycle::EJECT),
    ]
}

/// Per-type replacements for base definitions.
#[must_use]
pub fn overrides_for(project_type: ProjectType) -> Vec<FileDefinition> {
    let dir = project_type.template_dir();
    let template = |file: &str| format!("{dir}/{file}");

    let package = FileDefinition::plain(
        "package",
        &[(template("package.json").as_str(), "package.json")],
    )
    .with_lifecycle(Lifecycle::INIT)
    .with_mutations(Mutations::NAME);

    match project_type {
        ProjectType::NonCode => vec![
            package,
            FileDefinition::excluded("eslint"),
            FileDefinition::excluded("typedoc"),
        ],
        ProjectType::Library | ProjectType::CliLibrary | ProjectType::ReactLibrary => vec![
            package,
            FileDefinition::plain("src", &[(template("src").as_str(), "src")])
                .with_lifecycle(Lifecycle::INIT)
                .with_mutations(Mutations::NAME),
            FileDefinition::plain("test", &[(template("test").as_str(), "test")])
                .with_lifecycle(Lifecycle::INIT),
            FileDefinition::generatable(
                "typescript",
                &[
                    (template("tsconfig.json").as_str(), "tsconfig.json"),
                    (template("tsconfig.test.json").as_str(), "tsconfig.test.json"),
                ],
                extend_bundled_config,
            )
            .with_lifecycle(Lifecycle::EJECT),
            FileDefinition::tooling(
                "rollup",
                &[(template("rollup.config.mjs").as_str(), "rollup.config.mjs")],
            )
            .with_lifecycle(Lifecycle::EJECT),
            FileDefinition::tooling(
                "jest",
                &[(template("jest.config.mjs").as_str(), "jest.config.mjs")],
            )
            .with_lifecycle(Lifecycle::EJECT),
        ],
    }
}

/// A local TypeScript config that extends the bundled one.
fn extend_bundled_config(template: &Path) -> String {
    let extends = serde_json::Value::String(template.to_string_lossy().replace('\\', "/"));
    format!("{{\n  \"extends\": {extends}\n}}\n")
}
