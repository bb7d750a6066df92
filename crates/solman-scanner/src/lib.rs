//! Solman Scanner - .NET project inventory
//!
//! This crate provides read-only discovery of `.csproj` projects under a
//! directory tree, extraction of their target framework and declared
//! `packages.config` dependencies, and cross-project report views.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::needless_pass_by_value,
    clippy::map_unwrap_or,
    clippy::manual_let_else
)]

pub mod consolidate;
pub mod discovery;
pub mod error;
pub mod inventory;
pub mod output;
pub mod parser;
pub mod scan;
pub mod types;

pub use consolidate::{
    consolidate, dependency_listing, framework_usage, ConsolidationRow, DependencyRow,
    FrameworkUsageRow,
};
pub use error::{ScanError, ScanResult};
pub use inventory::Inventory;
pub use scan::Scanner;
pub use types::{Dependency, Project, ProjectIssue};
