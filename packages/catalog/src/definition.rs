//! File definition types.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

/// A lifecycle operation that places files into a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleOperation {
    /// First-time scaffold of an empty directory.
    Init,
    /// Refresh of common configuration files.
    Update,
    /// Copy build-tool configuration into the project for local override.
    Eject,
}

impl std::fmt::Display for LifecycleOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Init => write!(f, "init"),
            Self::Update => write!(f, "update"),
            Self::Eject => write!(f, "eject"),
        }
    }
}

/// Which lifecycle operations copy a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lifecycle {
    /// Copied by `init`.
    pub init: bool,
    /// Copied by `update`.
    pub update: bool,
    /// Copied by `eject`.
    pub eject: bool,
}

impl Lifecycle {
    /// Never copied.
    pub const NONE: Self = Self::new(false, false, false);
    /// Copied on `init` only.
    pub const INIT: Self = Self::new(true, false, false);
    /// Copied on `init` and refreshed on `update`.
    pub const INIT_UPDATE: Self = Self::new(true, true, false);
    /// Copied on `eject` only.
    pub const EJECT: Self = Self::new(false, false, true);

    /// Create a lifecycle from its three flags.
    #[must_use]
    pub const fn new(init: bool, update: bool, eject: bool) -> Self {
        Self {
            init,
            update,
            eject,
        }
    }

    /// Whether `operation` copies the file.
    #[must_use]
    pub const fn includes(self, operation: LifecycleOperation) -> bool {
        match operation {
            LifecycleOperation::Init => self.init,
            LifecycleOperation::Update => self.update,
            LifecycleOperation::Eject => self.eject,
        }
    }
}

/// Content changes applied to a file right after it is copied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mutations {
    /// Replace the project name placeholder with the project directory name.
    pub substitute_name: bool,
    /// Append the test registry line when running in test mode.
    pub inject_test_registry: bool,
}

impl Mutations {
    /// Name substitution only.
    pub const NAME: Self = Self {
        substitute_name: true,
        inject_test_registry: false,
    };

    /// Test registry injection only.
    pub const REGISTRY: Self = Self {
        substitute_name: false,
        inject_test_registry: true,
    };

    /// Whether any mutation applies.
    #[must_use]
    pub const fn any(self) -> bool {
        self.substitute_name || self.inject_test_registry
    }
}

/// One template/destination pair, copied as a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLocation {
    /// Source, relative to the bundled template root.
    pub template: PathBuf,
    /// Destination, relative to the project root.
    pub destination: PathBuf,
}

impl FileLocation {
    /// Create a location pair.
    #[must_use]
    pub fn new(template: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            destination: destination.into(),
        }
    }
}

/// Produces destination content from the absolute path of the bundled template.
pub type Generator = fn(&Path) -> String;

/// A file that is only ever copied.
#[derive(Debug, Clone)]
pub struct PlainFile {
    /// Identifier, unique within a project type.
    pub name: String,
    /// Location pairs, processed in order.
    pub locations: Vec<FileLocation>,
    /// Lifecycle flags.
    pub lifecycle: Lifecycle,
    /// Post-copy content changes.
    pub mutations: Mutations,
}

/// A build-tool configuration file resolved at run time.
#[derive(Debug, Clone)]
pub struct ToolingFile {
    /// Identifier, unique within a project type.
    pub name: String,
    /// Location pairs, processed in order.
    pub locations: Vec<FileLocation>,
    /// Lifecycle flags.
    pub lifecycle: Lifecycle,
}

/// A tooling file whose local copy is generated instead of copied verbatim.
#[derive(Debug, Clone)]
pub struct GeneratableFile {
    /// Identifier, unique within a project type.
    pub name: String,
    /// Location pairs, processed in order.
    pub locations: Vec<FileLocation>,
    /// Lifecycle flags.
    pub lifecycle: Lifecycle,
    /// Content generator, called once per location.
    pub generate: Generator,
}

/// A named unit of template content.
#[derive(Debug, Clone)]
pub enum FileDefinition {
    /// Copied only.
    Plain(PlainFile),
    /// Copied, and resolved local-over-template at run time.
    OverridableTooling(ToolingFile),
    /// Generated on copy, and resolved local-over-template at run time.
    GeneratableTooling(GeneratableFile),
}

fn to_locations(locations: &[(&str, &str)]) -> Vec<FileLocation> {
    locations
        .iter()
        .map(|(template, destination)| FileLocation::new(*template, *destination))
        .collect()
}

impl FileDefinition {
    /// A plain file with no lifecycle flags set yet.
    #[must_use]
    pub fn plain(name: &str, locations: &[(&str, &str)]) -> Self {
        Self::Plain(PlainFile {
            name: name.to_string(),
            locations: to_locations(locations),
            lifecycle: Lifecycle::NONE,
            mutations: Mutations::default(),
        })
    }

    /// An overridable tooling file with no lifecycle flags set yet.
    #[must_use]
    pub fn tooling(name: &str, locations: &[(&str, &str)]) -> Self {
        Self::OverridableTooling(ToolingFile {
            name: name.to_string(),
            locations: to_locations(locations),
            lifecycle: Lifecycle::NONE,
        })
    }

    /// A generatable tooling file with no lifecycle flags set yet.
    #[must_use]
    pub fn generatable(name: &str, locations: &[(&str, &str)], generate: Generator) -> Self {
        Self::GeneratableTooling(GeneratableFile {
            name: name.to_string(),
            locations: to_locations(locations),
            lifecycle: Lifecycle::NONE,
            generate,
        })
    }

    /// A placeholder for a file that does not apply to a project type.
    #[must_use]
    pub fn excluded(name: &str) -> Self {
        Self::plain(name, &[])
    }

    /// Set the lifecycle flags.
    #[must_use]
    pub fn with_lifecycle(mut self, lifecycle: Lifecycle) -> Self {
        match &mut self {
            Self::Plain(file) => file.lifecycle = lifecycle,
            Self::OverridableTooling(file) => file.lifecycle = lifecycle,
            Self::GeneratableTooling(file) => file.lifecycle = lifecycle,
        }
        self
    }

    /// Set the post-copy mutations. Tooling files never carry mutations, so
    /// this only affects plain files.
    #[must_use]
    pub fn with_mutations(mut self, mutations: Mutations) -> Self {
        if let Self::Plain(file) = &mut self {
            file.mutations = mutations;
        }
        self
    }

    /// Identifier of the definition.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Plain(file) => &file.name,
            Self::OverridableTooling(file) => &file.name,
            Self::GeneratableTooling(file) => &file.name,
        }
    }

    /// Location pairs in copy order.
    #[must_use]
    pub fn locations(&self) -> &[FileLocation] {
        match self {
            Self::Plain(file) => &file.locations,
            Self::OverridableTooling(file) => &file.locations,
            Self::GeneratableTooling(file) => &file.locations,
        }
    }

    /// Lifecycle flags.
    #[must_use]
    pub const fn lifecycle(&self) -> Lifecycle {
        match self {
            Self::Plain(file) => file.lifecycle,
            Self::OverridableTooling(file) => file.lifecycle,
            Self::GeneratableTooling(file) => file.lifecycle,
        }
    }

    /// Post-copy mutations (always empty for tooling files).
    #[must_use]
    pub const fn mutations(&self) -> Mutations {
        match self {
            Self::Plain(file) => file.mutations,
            Self::OverridableTooling(_) | Self::GeneratableTooling(_) => Mutations {
                substitute_name: false,
                inject_test_registry: false,
            },
        }
    }

    /// The content generator, for generatable tooling files.
    #[must_use]
    pub const fn generator(&self) -> Option<Generator> {
        match self {
            Self::GeneratableTooling(file) => Some(file.generate),
            Self::Plain(_) | Self::OverridableTooling(_) => None,
        }
    }

    /// Whether the definition takes part in tooling resolution.
    #[must_use]
    pub const fn is_overridable(&self) -> bool {
        matches!(
            self,
            Self::OverridableTooling(_) | Self::GeneratableTooling(_)
        )
    }

    /// Whether this is an excluded placeholder.
    #[must_use]
    pub fn is_excluded(&self) -> bool {
        self.locations().is_empty() && self.lifecycle() == Lifecycle::NONE
    }
}
