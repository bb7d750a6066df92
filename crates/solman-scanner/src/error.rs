//! Error types for the solman scanner

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scanner operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur during scanning
#[derive(Error, Debug)]
pub enum ScanError {
    /// Root directory does not exist
    #[error("Directory {} does not exists", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Root path exists but is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Project descriptor could not be read or parsed
    #[error("Unparseable project descriptor {}: {reason}", path.display())]
    UnparseableDescriptor { path: PathBuf, reason: String },

    /// Project descriptor has neither known framework field
    #[error("No TargetFrameworkVersion or TargetFramework in {}", .0.display())]
    FrameworkFieldMissing(PathBuf),

    /// Dependency descriptor exists but is unusable
    #[error("Malformed dependency descriptor {}: {reason}", path.display())]
    MalformedDependencyDescriptor { path: PathBuf, reason: String },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize JSON
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScanError {
    /// Whether the failure belongs to a single project rather than the whole run
    #[must_use]
    pub fn is_project_scoped(&self) -> bool {
        matches!(
            self,
            ScanError::UnparseableDescriptor { .. }
                | ScanError::FrameworkFieldMissing(_)
                | ScanError::MalformedDependencyDescriptor { .. }
        )
    }
}
