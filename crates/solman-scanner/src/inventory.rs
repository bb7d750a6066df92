//! Inventory types for scan results

use crate::types::{Project, ProjectIssue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete fact set from a scan
///
/// Read-only once returned by the scanner; report views borrow it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    /// Root directory that was scanned
    pub root: PathBuf,
    /// Projects in discovery order with frameworks and dependencies populated
    pub projects: Vec<Project>,
    /// Project-scoped failures in discovery order
    #[serde(default)]
    pub issues: Vec<ProjectIssue>,
    /// When the scan was performed
    pub scanned_at: DateTime<Utc>,
}

impl Inventory {
    /// Assemble an inventory stamped with the current time
    #[must_use]
    pub fn new(root: PathBuf, projects: Vec<Project>, issues: Vec<ProjectIssue>) -> Self {
        Self {
            root,
            projects,
            issues,
            scanned_at: Utc::now(),
        }
    }

    /// Whether no project descriptor was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Total number of declared package references across all projects
    #[must_use]
    pub fn dependency_count(&self) -> usize {
        self.projects.iter().map(|p| p.dependencies.len()).sum()
    }

    /// Whether any project-scoped failure was recorded
    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}
