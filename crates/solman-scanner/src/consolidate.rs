//! Report views over a completed inventory
//!
//! Every function here is pure: it borrows the projects and returns rows.
//! Ordering follows first appearance in the input, never sorting, so the same
//! inventory always yields the same rows.

use crate::types::{Dependency, Project};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Separator between versions in a rendered consolidation row
pub const VERSION_SEPARATOR: &str = ", ";

/// One project in the framework usage view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkUsageRow {
    pub framework: String,
    pub project: String,
}

/// One declared package reference in the dependency listing view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRow {
    pub project: String,
    pub package: String,
    pub version: String,
    pub framework: String,
}

/// Distinct versions of one package for one framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidationRow {
    pub package: String,
    pub framework: String,
    /// Never empty; first-observed order
    pub versions: Vec<String>,
}

impl ConsolidationRow {
    /// Versions joined for display
    #[must_use]
    pub fn versions_display(&self) -> String {
        self.versions.join(VERSION_SEPARATOR)
    }
}

/// Projects clustered by target framework
///
/// Groups appear in the order their framework is first seen and projects keep
/// their input order within a group. One row per project.
#[must_use]
pub fn framework_usage(projects: &[Project]) -> Vec<FrameworkUsageRow> {
    let mut groups: Vec<(&str, Vec<&Project>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for project in projects {
        let framework = project.framework();
        let slot = *index.entry(framework).or_insert_with(|| {
            groups.push((framework, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(project);
    }

    groups
        .into_iter()
        .flat_map(|(framework, members)| {
            members.into_iter().map(move |project| FrameworkUsageRow {
                framework: framework.to_string(),
                project: project.name.clone(),
            })
        })
        .collect()
}

/// Every declared package reference, project by project
#[must_use]
pub fn dependency_listing(projects: &[Project]) -> Vec<DependencyRow> {
    projects
        .iter()
        .flat_map(|project| {
            project.dependencies.iter().map(move |dep| DependencyRow {
                project: project.name.clone(),
                package: dep.name.clone(),
                version: dep.version.clone(),
                framework: dep.target_framework.clone(),
            })
        })
        .collect()
}

/// Distinct versions per (package, framework) pair
///
/// With `filter`, only dependencies whose name equals it exactly are kept.
/// Frameworks are the distinct frameworks across the whole (filtered)
/// collection; pairs without any version are omitted. Rows for one package
/// are contiguous.
#[must_use]
pub fn consolidate(projects: &[Project], filter: Option<&str>) -> Vec<ConsolidationRow> {
    let dependencies: Vec<&Dependency> = projects
        .iter()
        .flat_map(|p| p.dependencies.iter())
        .filter(|dep| filter.map_or(true, |name| dep.name == name))
        .collect();

    let packages = distinct(dependencies.iter().map(|dep| dep.name.as_str()));
    let frameworks = distinct(dependencies.iter().map(|dep| dep.target_framework.as_str()));

    let mut versions: HashMap<(&str, &str), Vec<&str>> = HashMap::new();
    for dep in &dependencies {
        let seen = versions
            .entry((dep.name.as_str(), dep.target_framework.as_str()))
            .or_default();
        if !seen.contains(&dep.version.as_str()) {
            seen.push(dep.version.as_str());
        }
    }

    let mut rows = Vec::new();
    for package in &packages {
        for framework in &frameworks {
            let Some(used) = versions.get(&(*package, *framework)) else {
                continue;
            };
            rows.push(ConsolidationRow {
                package: (*package).to_string(),
                framework: (*framework).to_string(),
                versions: used.iter().map(|v| (*v).to_string()).collect(),
            });
        }
    }
    rows
}

/// Split consolidation rows into per-package runs
#[must_use]
pub fn by_package(rows: &[ConsolidationRow]) -> Vec<&[ConsolidationRow]> {
    rows.chunk_by(|a, b| a.package == b.package).collect()
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
