//! Console table renderer

use crate::consolidate::{by_package, ConsolidationRow, DependencyRow, FrameworkUsageRow};
use comfy_table::presets::ASCII_FULL;
use comfy_table::Table;

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL).set_header(header.to_vec());
    table
}

/// Render the framework usage view
#[must_use]
pub fn framework_table(rows: &[FrameworkUsageRow]) -> String {
    let mut table = new_table(&["Framework", "Projects"]);
    for row in rows {
        table.add_row(vec![row.framework.as_str(), row.project.as_str()]);
    }
    table.to_string()
}

/// Render the dependency listing view
#[must_use]
pub fn dependency_table(rows: &[DependencyRow]) -> String {
    let mut table = new_table(&["Solution", "Nuget Name", "Version", "Target Framework"]);
    for row in rows {
        table.add_row(vec![
            row.project.as_str(),
            row.package.as_str(),
            row.version.as_str(),
            row.framework.as_str(),
        ]);
    }
    table.to_string()
}

/// Render the consolidation view, one table per package
#[must_use]
pub fn consolidation_tables(rows: &[ConsolidationRow]) -> Vec<String> {
    by_package(rows)
        .into_iter()
        .map(|run| {
            let mut table = new_table(&["Nuget Name", "Target Framework", "Used versions"]);
            for row in run {
                table.add_row(vec![
                    row.package.clone(),
                    row.framework.clone(),
                    row.versions_display(),
                ]);
            }
            table.to_string()
        })
        .collect()
}
