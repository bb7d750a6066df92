//! Parsers for project and dependency descriptors

pub mod csproj;
pub mod packages_config;

pub use csproj::{parse_target_framework, read_target_framework};
pub use packages_config::{parse_packages_config, read_packages_config};
