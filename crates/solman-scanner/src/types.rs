//! Shared types for the solman scanner

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Extension of project descriptor files
pub const PROJECT_EXTENSION: &str = "csproj";

/// File name of the dependency descriptor next to each project descriptor
pub const PACKAGES_CONFIG: &str = "packages.config";

/// Framework recorded when a descriptor yields none
pub const UNKNOWN_FRAMEWORK: &str = "Unknown";

/// A discovered project and the facts extracted from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Descriptor file name without its extension
    pub name: String,
    /// Path to the `.csproj` descriptor
    pub descriptor_path: PathBuf,
    /// Expected `packages.config` path; may not exist
    pub dependency_descriptor_path: PathBuf,
    /// Target framework, `None` until extraction has run
    pub target_framework: Option<String>,
    /// Declared package references in declaration order
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl Project {
    /// Create a project record for a descriptor path
    #[must_use]
    pub fn from_descriptor(path: &Path) -> Self {
        let is_descriptor = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(PROJECT_EXTENSION));
        let name = if is_descriptor {
            path.file_stem()
        } else {
            path.file_name()
        }
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
        let dependency_descriptor_path = path
            .parent()
            .map_or_else(|| PathBuf::from(PACKAGES_CONFIG), |dir| dir.join(PACKAGES_CONFIG));

        Self {
            name,
            descriptor_path: path.to_path_buf(),
            dependency_descriptor_path,
            target_framework: None,
            dependencies: Vec::new(),
        }
    }

    /// Target framework, or the `Unknown` sentinel if not yet resolved
    #[must_use]
    pub fn framework(&self) -> &str {
        self.target_framework.as_deref().unwrap_or(UNKNOWN_FRAMEWORK)
    }
}

/// One declared package reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    /// Package id
    pub name: String,
    /// Version string, verbatim
    pub version: String,
    /// Framework the reference was declared for
    pub target_framework: String,
}

/// A project-scoped failure recorded during extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectIssue {
    /// Name of the affected project
    pub project: String,
    /// File that caused the failure
    pub path: PathBuf,
    /// Human-readable message
    pub message: String,
}
