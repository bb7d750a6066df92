//! JSON output formatter

use crate::consolidate::{ConsolidationRow, DependencyRow, FrameworkUsageRow};
use crate::error::ScanResult;
use crate::inventory::Inventory;
use serde::Serialize;

/// Inventory plus whichever views were requested
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub inventory: &'a Inventory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework_usage: Option<Vec<FrameworkUsageRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<DependencyRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consolidation: Option<Vec<ConsolidationRow>>,
}

/// Convert a report to a pretty JSON string
///
/// # Errors
/// Returns an error if serialization fails
pub fn to_json(report: &Report<'_>) -> ScanResult<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}
