//! Project descriptor discovery
//!
//! Walks a root directory recursively and yields one [`Project`] per
//! `.csproj` file. Entries are visited in file-name order so repeated runs
//! over an unchanged tree produce the same sequence.

use crate::error::{ScanError, ScanResult};
use crate::types::{Project, PROJECT_EXTENSION};
use std::io;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Find every project descriptor under `root`
///
/// An empty result is not an error; callers report it separately.
///
/// # Errors
/// Returns `DirectoryNotFound` if `root` does not exist and `NotADirectory`
/// if it is a file. Walk failures are surfaced as IO errors.
pub fn find_projects(root: &Path) -> ScanResult<Vec<Project>> {
    if !root.exists() {
        return Err(ScanError::DirectoryNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut projects = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() || !is_project_descriptor(entry.path()) {
            continue;
        }

        debug!(path = %entry.path().display(), "found project descriptor");
        projects.push(Project::from_descriptor(entry.path()));
    }

    Ok(projects)
}

fn is_project_descriptor(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PROJECT_EXTENSION))
}
