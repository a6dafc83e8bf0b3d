//! Project type definitions and the catalog that holds them.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use crate::defaults::{base_definitions, overrides_for};
use crate::definition::{FileDefinition, LifecycleOperation};
use crate::error::CatalogError;
use crate::project_type::ProjectType;

/// Every file definition of one project type, in declared order.
#[derive(Debug, Clone)]
pub struct ProjectTypeDefinition {
    project_type: ProjectType,
    files: Vec<FileDefinition>,
}

impl ProjectTypeDefinition {
    /// The project type this definition describes.
    #[must_use]
    pub const fn project_type(&self) -> ProjectType {
        self.project_type
    }

    /// All definitions, including excluded placeholders.
    #[must_use]
    pub fn files(&self) -> &[FileDefinition] {
        &self.files
    }

    /// Look up a definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FileDefinition> {
        self.files.iter().find(|f| f.name() == name)
    }

    /// Names of all definitions in declared order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(FileDefinition::name)
    }

    /// Definitions copied by `operation`, in declared order.
    #[must_use]
    pub fn filter_by_lifecycle(&self, operation: LifecycleOperation) -> Vec<&FileDefinition> {
        self.files
            .iter()
            .filter(|f| f.lifecycle().includes(operation))
            .collect()
    }

    /// Definitions that take part in tooling resolution.
    pub fn overridable(&self) -> impl Iterator<Item = &FileDefinition> {
        self.files.iter().filter(|f| f.is_overridable())
    }
}

/// Assemble a project type from a common base and whole-definition overrides.
///
/// Declared order is the base order; an override takes the slot of the base
/// definition it replaces.
///
/// # Errors
///
/// * If the base declares a name twice
/// * If an override names a definition missing from the base
/// * If two overrides replace the same definition
pub fn build_project_type(
    project_type: ProjectType,
    base: Vec<FileDefinition>,
    overrides: Vec<FileDefinition>,
) -> Result<ProjectTypeDefinition, CatalogError> {
    let mut files: Vec<FileDefinition> = Vec::with_capacity(base.len());
    for def in base {
        if files.iter().any(|f| f.name() == def.name()) {
            return Err(CatalogError::DuplicateDefinition {
                project_type: project_type.to_string(),
                name: def.name().to_string(),
            });
        }
        files.push(def);
    }

    let mut replaced: Vec<String> = Vec::new();
    for def in overrides {
        let name = def.name().to_string();
        if replaced.contains(&name) {
            return Err(CatalogError::DuplicateDefinition {
                project_type: project_type.to_string(),
                name,
            });
        }

        let slot = files
            .iter_mut()
            .find(|f| f.name() == name)
            .ok_or_else(|| CatalogError::UnknownOverride {
                project_type: project_type.to_string(),
                name: name.clone(),
            })?;
        *slot = def;
        replaced.push(name);
    }

    log::debug!(
        "Built project type {project_type} with {} definitions ({} overridden)",
        files.len(),
        replaced.len()
    );

    Ok(ProjectTypeDefinition {
        project_type,
        files,
    })
}

/// The definitions of every registered project type.
#[derive(Debug, Clone)]
pub struct Catalog {
    types: Vec<ProjectTypeDefinition>,
}

impl Catalog {
    /// Build the built-in catalog.
    ///
    /// # Errors
    ///
    /// * If a built-in override does not match the base schema
    pub fn new() -> Result<Self, CatalogError> {
        let types = ProjectType::ALL
            .into_iter()
            .map(|pt| build_project_type(pt, base_definitions(), overrides_for(pt)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { types })
    }

    /// Definition of a project type.
    ///
    /// # Errors
    ///
    /// * If the catalog does not contain `project_type`
    pub fn get_definition(
        &self,
        project_type: ProjectType,
    ) -> Result<&ProjectTypeDefinition, CatalogError> {
        self.types
            .iter()
            .find(|t| t.project_type == project_type)
            .ok_or_else(|| CatalogError::UnknownProjectType(project_type.to_string()))
    }

    /// Definition of a project type given by identifier.
    ///
    /// # Errors
    ///
    /// * If `id` is not a registered project type
    pub fn get_definition_by_id(&self, id: &str) -> Result<&ProjectTypeDefinition, CatalogError> {
        self.get_definition(id.parse()?)
    }

    /// Definitions of `project_type` copied by `operation`, in declared order.
    ///
    /// # Errors
    ///
    /// * If the catalog does not contain `project_type`
    pub fn filter_by_lifecycle(
        &self,
        project_type: ProjectType,
        operation: LifecycleOperation,
    ) -> Result<Vec<&FileDefinition>, CatalogError> {
        Ok(self
            .get_definition(project_type)?
            .filter_by_lifecycle(operation))
    }

    /// Like [`Self::filter_by_lifecycle`], narrowed to the named items.
    ///
    /// An empty `items` slice selects everything. Declared order is kept
    /// regardless of the order of `items`.
    ///
    /// # Errors
    ///
    /// * If the catalog does not contain `project_type`
    /// * If an item names no definition of the project type
    pub fn select(
        &self,
        project_type: ProjectType,
        operation: LifecycleOperation,
        items: &[String],
    ) -> Result<Vec<&FileDefinition>, CatalogError> {
        let definition = self.get_definition(project_type)?;

        for item in items {
            if definition.get(item).is_none() {
                return Err(CatalogError::UnknownFile {
                    project_type: project_type.to_string(),
                    name: item.clone(),
                });
            }
        }

        Ok(definition
            .filter_by_lifecycle(operation)
            .into_iter()
            .filter(|f| items.is_empty() || items.iter().any(|i| i == f.name()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::Lifecycle;

    fn names(defs: &[&FileDefinition]) -> Vec<String> {
        defs.iter().map(|d| d.name().to_string()).collect()
    }

    #[test]
    fn test_builtin_catalog_builds() {
        let catalog = Catalog::new().unwrap();
        for pt in ProjectType::ALL {
            let def = catalog.get_definition(pt).unwrap();
            assert_eq!(def.project_type(), pt);
        }
    }

    #[test]
    fn test_every_type_declares_every_base_name() {
        let catalog = Catalog::new().unwrap();
        let base: Vec<String> = base_definitions()
            .iter()
            .map(|d| d.name().to_string())
            .collect();

        for pt in ProjectType::ALL {
            let def = catalog.get_definition(pt).unwrap();
            let declared: Vec<String> = def.names().map(String::from).collect();
            assert_eq!(declared, base, "{pt} must keep the base schema and order");
        }
    }

    #[test]
    fn test_filter_by_lifecycle_matches_flags() {
        let catalog = Catalog::new().unwrap();
        let operations = [
            LifecycleOperation::Init,
            LifecycleOperation::Update,
            LifecycleOperation::Eject,
        ];

        for pt in ProjectType::ALL {
            let def = catalog.get_definition(pt).unwrap();
            for op in operations {
                let expected: Vec<String> = def
                    .files()
                    .iter()
                    .filter(|f| f.lifecycle().includes(op))
                    .map(|f| f.name().to_string())
                    .collect();
                let actual = names(&catalog.filter_by_lifecycle(pt, op).unwrap());
                assert_eq!(actual, expected, "{pt} {op}");
            }
        }
    }

    #[test]
    fn test_library_init_files() {
        let catalog = Catalog::new().unwrap();
        let init = names(
            &catalog
                .filter_by_lifecycle(ProjectType::Library, LifecycleOperation::Init)
                .unwrap(),
        );

        assert_eq!(
            init,
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
    }

    #[test]
    fn test_library_eject_files() {
        let catalog = Catalog::new().unwrap();
        let eject = names(
            &catalog
                .filter_by_lifecycle(ProjectType::Library, LifecycleOperation::Eject)
                .unwrap(),
        );

        assert_eq!(
            eject,
            vec!["prettier", "eslint", "typescript", "rollup", "jest", "typedoc"]
        );
    }

    #[test]
    fn test_non_code_excludes_code_tooling() {
        let catalog = Catalog::new().unwrap();
        let def = catalog.get_definition(ProjectType::NonCode).unwrap();

        for name in ["src", "test", "typescript", "rollup", "jest", "eslint", "typedoc"] {
            assert!(def.get(name).unwrap().is_excluded(), "{name}");
        }
        assert!(!def.get("package").unwrap().is_excluded());
        assert_eq!(
            names(&def.filter_by_lifecycle(LifecycleOperation::Eject)),
            vec!["prettier"]
        );
    }

    #[test]
    fn test_build_rejects_unknown_override() {
        let base = vec![FileDefinition::excluded("src")];
        let overrides = vec![FileDefinition::plain("scr", &[("library/src", "src")])];

        let err = build_project_type(ProjectType::Library, base, overrides).unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownOverride {
                project_type: "library".to_string(),
                name: "scr".to_string(),
            }
        );
    }

    #[test]
    fn test_build_rejects_duplicate_base() {
        let base = vec![
            FileDefinition::excluded("src"),
            FileDefinition::excluded("src"),
        ];

        let err = build_project_type(ProjectType::Library, base, Vec::new()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateDefinition { .. }));
    }

    #[test]
    fn test_build_override_replaces_in_place() {
        let base = vec![
            FileDefinition::excluded("a"),
            FileDefinition::excluded("b"),
            FileDefinition::excluded("c"),
        ];
        let overrides =
            vec![FileDefinition::plain("b", &[("x/b", "b")]).with_lifecycle(Lifecycle::INIT)];

        let def = build_project_type(ProjectType::Library, base, overrides).unwrap();
        assert_eq!(def.names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert!(def.get("b").unwrap().lifecycle().init);
    }

    #[test]
    fn test_select_items() {
        let catalog = Catalog::new().unwrap();
        let items = vec!["rollup".to_string(), "eslint".to_string()];

        let selected = catalog
            .select(ProjectType::Library, LifecycleOperation::Eject, &items)
            .unwrap();
        assert_eq!(names(&selected), vec!["eslint", "rollup"]);
    }

    #[test]
    fn test_select_unknown_item() {
        let catalog = Catalog::new().unwrap();
        let items = vec!["webpack".to_string()];

        let err = catalog
            .select(ProjectType::Library, LifecycleOperation::Eject, &items)
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownFile { .. }));
    }

    #[test]
    fn test_get_definition_by_id() {
        let catalog = Catalog::new().unwrap();
        assert_eq!(
            catalog
                .get_definition_by_id("CLILibrary")
                .unwrap()
                .project_type(),
            ProjectType::CliLibrary
        );
        assert!(matches!(
            catalog.get_definition_by_id("app"),
            Err(CatalogError::UnknownProjectType(_))
        ));
    }
}
