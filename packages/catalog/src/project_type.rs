//! Supported project types.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::str::FromStr;

use crate::error::CatalogError;

/// A named template family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProjectType {
    /// TypeScript library bundled with rollup.
    #[default]
    Library,
    /// Library that also ships a command-line entry point.
    CliLibrary,
    /// React component library.
    ReactLibrary,
    /// Repository without source code (docs, configuration).
    NonCode,
}

impl ProjectType {
    /// Every registered project type.
    pub const ALL: [Self; 4] = [
        Self::Library,
        Self::CliLibrary,
        Self::ReactLibrary,
        Self::NonCode,
    ];

    /// Canonical identifier, as written in manifests and on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::CliLibrary => "cli-library",
            Self::ReactLibrary => "react-library",
            Self::NonCode => "non-code",
        }
    }

    /// Folder under the template root holding this type's files.
    #[must_use]
    pub const fn template_dir(self) -> &'static str {
        self.id()
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for ProjectType {
    type Err = CatalogError;

    /// Parse an identifier, ignoring case, `-` and `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalize = |value: &str| -> String {
            value
                .chars()
                .filter(|c| *c != '-' && *c != '_')
                .map(|c| c.to_ascii_lowercase())
                .collect()
        };
        let wanted = normalize(s.trim());

        Self::ALL
            .into_iter()
            .find(|pt| normalize(pt.id()) == wanted)
            .ok_or_else(|| CatalogError::UnknownProjectType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_ids() {
        for pt in ProjectType::ALL {
            assert_eq!(pt.id().parse::<ProjectType>().unwrap(), pt);
        }
    }

    #[test]
    fn test_parse_legacy_spellings() {
        assert_eq!("Library".parse::<ProjectType>().unwrap(), ProjectType::Library);
        assert_eq!(
            "CLILibrary".parse::<ProjectType>().unwrap(),
            ProjectType::CliLibrary
        );
        assert_eq!(
            "react_library".parse::<ProjectType>().unwrap(),
            ProjectType::ReactLibrary
        );
        assert_eq!("NonCode".parse::<ProjectType>().unwrap(), ProjectType::NonCode);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "application".parse::<ProjectType>(),
            Err(CatalogError::UnknownProjectType("application".to_string()))
        );
    }
}
