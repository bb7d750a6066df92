//! Main scanner implementation

use crate::discovery::find_projects;
use crate::error::{ScanError, ScanResult};
use crate::inventory::Inventory;
use crate::parser::{read_packages_config, read_target_framework};
use crate::types::{Project, ProjectIssue, UNKNOWN_FRAMEWORK};
use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// The main scanner struct
#[derive(Debug, Clone)]
pub struct Scanner {
    /// Abort the whole run on the first framework extraction failure
    pub strict: bool,
    /// Extract projects on the rayon pool
    pub parallel: bool,
}

impl Default for Scanner {
    fn default() -> Self {
        Self {
            strict: false,
            parallel: true,
        }
    }
}

/// Result of extracting one project
#[derive(Debug)]
struct Extraction {
    project: Project,
    framework_error: Option<ScanError>,
    dependency_error: Option<ScanError>,
}

impl Scanner {
    /// Create a new scanner
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable legacy run-abort behaviour on framework failures
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Toggle parallel per-project extraction
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Discover and extract every project under `root`
    ///
    /// Extraction of each project is independent. All of it completes before
    /// the inventory is returned.
    ///
    /// # Errors
    /// Returns run-scoped errors from discovery. In strict mode, also returns
    /// the first framework extraction failure in discovery order.
    pub fn scan(&self, root: &Path) -> ScanResult<Inventory> {
        let discovered = find_projects(root)?;
        info!(count = discovered.len(), root = %root.display(), "discovered projects");

        let extractions: Vec<Extraction> = if self.parallel {
            discovered.into_par_iter().map(extract_project).collect()
        } else {
            discovered.into_iter().map(extract_project).collect()
        };

        let mut projects = Vec::with_capacity(extractions.len());
        let mut issues = Vec::new();
        for extraction in extractions {
            let Extraction {
                project,
                framework_error,
                dependency_error,
            } = extraction;

            if let Some(err) = framework_error {
                if self.strict {
                    return Err(err);
                }
                debug!(project = %project.name, "{err}");
                issues.push(issue_for(&project, &project.descriptor_path, &err));
            }
            if let Some(err) = dependency_error {
                debug!(project = %project.name, "{err}");
                issues.push(issue_for(&project, &project.dependency_descriptor_path, &err));
            }
            projects.push(project);
        }

        info!(
            projects = projects.len(),
            issues = issues.len(),
            "extraction complete"
        );

        Ok(Inventory::new(root.to_path_buf(), projects, issues))
    }
}

fn extract_project(mut project: Project) -> Extraction {
    let framework_error = match read_target_framework(&project.descriptor_path) {
        Ok(framework) => {
            project.target_framework = Some(framework);
            None
        }
        Err(err) => {
            project.target_framework = Some(UNKNOWN_FRAMEWORK.to_string());
            Some(err)
        }
    };

    let dependency_error = match read_packages_config(&project.dependency_descriptor_path) {
        Ok(Some(dependencies)) => {
            project.dependencies.extend(dependencies);
            None
        }
        Ok(None) => None,
        Err(err) => Some(err),
    };

    Extraction {
        project,
        framework_error,
        dependency_error,
    }
}

fn issue_for(project: &Project, path: &Path, err: &ScanError) -> ProjectIssue {
    ProjectIssue {
        project: project.name.clone(),
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
