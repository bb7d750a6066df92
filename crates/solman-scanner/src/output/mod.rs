//! Output formatters for report views

pub mod delimited;
pub mod json;
pub mod table;

pub use delimited::{write_dependency_listing, write_framework_usage, DelimitedWriter};
pub use json::{to_json, Report};
pub use table::{consolidation_tables, dependency_table, framework_table};
