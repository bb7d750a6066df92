//! Report selection and rendering

use crate::Cli;
use anyhow::{Context, Result};
use solman_scanner::output::{
    consolidation_tables, dependency_table, framework_table, to_json, write_dependency_listing,
    write_framework_usage, Report,
};
use solman_scanner::{consolidate, dependency_listing, framework_usage, Inventory};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Which views to produce and where they go
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub framework_usage: bool,
    pub dependencies: bool,
    pub consolidate: bool,
    pub filter: Option<String>,
    pub net_output_file: Option<PathBuf>,
    pub nuget_output_file: Option<PathBuf>,
    pub verbose: bool,
    pub json: bool,
}

impl From<&Cli> for ReportOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            framework_usage: cli.net_fwk_version,
            dependencies: cli.dependencies,
            consolidate: cli.consolidate_dependencies,
            filter: cli.filter_dep.clone().filter(|name| !name.is_empty()),
            net_output_file: cli.net_output_file.clone(),
            nuget_output_file: cli.nuget_output_file.clone(),
            verbose: cli.verbose,
            json: cli.json,
        }
    }
}

impl ReportOptions {
    fn print_tables(&self) -> bool {
        self.verbose && !self.json
    }
}

/// Compute the requested views, write output files, and print to `out`
pub fn render<W: Write>(inventory: &Inventory, options: &ReportOptions, out: &mut W) -> Result<()> {
    warn_on_unused_options(options);

    let usage = options
        .framework_usage
        .then(|| framework_usage(&inventory.projects));
    let listing = options
        .dependencies
        .then(|| dependency_listing(&inventory.projects));
    let consolidation = options
        .consolidate
        .then(|| consolidate(&inventory.projects, options.filter.as_deref()));

    if let Some(rows) = &usage {
        if let Some(path) = &options.net_output_file {
            let written = write_framework_usage(path, rows)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), rows = written, "framework usage written");
        }
        if options.print_tables() {
            writeln!(out, "{}", framework_table(rows))?;
        }
    }

    if let Some(rows) = &listing {
        if let Some(path) = &options.nuget_output_file {
            let written = write_dependency_listing(path, rows)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), rows = written, "dependency listing written");
        }
        if options.print_tables() {
            writeln!(out, "{}", dependency_table(rows))?;
        }
    }

    if let Some(rows) = &consolidation {
        if options.print_tables() {
            for table in consolidation_tables(rows) {
                writeln!(out, "{table}")?;
                writeln!(out)?;
            }
        }
    }

    if options.json {
        let report = Report {
            inventory,
            framework_usage: usage,
            dependencies: listing,
            consolidation,
        };
        writeln!(out, "{}", to_json(&report)?)?;
    }

    Ok(())
}

fn warn_on_unused_options(options: &ReportOptions) {
    if options.net_output_file.is_some() && !options.framework_usage {
        warn!("--netOutputFile is ignored without -f/--netFwkVersion");
    }
    if options.nuget_output_file.is_some() && !options.dependencies {
        warn!("--nugetOutputFile is ignored without -d/--dependencies");
    }
    if options.filter.is_some() && !options.consolidate {
        warn!("--filterDep is ignored without -c/--consolidateDependencies");
    }
    if !options.verbose && !options.json {
        let writes_file = (options.framework_usage && options.net_output_file.is_some())
            || (options.dependencies && options.nuget_output_file.is_some());
        if !writes_file {
            info!("no console or file output requested; results are computed but not shown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solman_scanner::{Dependency, Project};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn inventory() -> Inventory {
        let mut project = Project::from_descriptor(Path::new("/src/App/App.csproj"));
        project.target_framework = Some("v4.8".to_string());
        project.dependencies.push(Dependency {
            name: "PackageA".to_string(),
            version: "1.2.0".to_string(),
            target_framework: "net48".to_string(),
        });
        Inventory::new(PathBuf::from("/src"), vec![project], Vec::new())
    }

    #[test]
    fn test_quiet_run_prints_nothing() {
        let options = ReportOptions {
            framework_usage: true,
            dependencies: true,
            consolidate: true,
            ..ReportOptions::default()
        };
        let mut out = Vec::new();
        render(&inventory(), &options, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_verbose_prints_tables() {
        let options = ReportOptions {
            framework_usage: true,
            consolidate: true,
            verbose: true,
            ..ReportOptions::default()
        };
        let mut out = Vec::new();
        render(&inventory(), &options, &mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Framework"));
        assert!(printed.contains("Used versions"));
        assert!(!printed.contains("Solution"));
    }

    #[test]
    fn test_output_files_only_for_enabled_reports() {
        let temp = TempDir::new().unwrap();
        let net = temp.path().join("net.csv");
        let nuget = temp.path().join("nuget.csv");
        let options = ReportOptions {
            framework_usage: true,
            net_output_file: Some(net.clone()),
            nuget_output_file: Some(nuget.clone()),
            ..ReportOptions::default()
        };
        render(&inventory(), &options, &mut Vec::new()).unwrap();

        assert_eq!(fs::read_to_string(&net).unwrap(), "App;v4.8;\n");
        assert!(!nuget.exists());
    }

    #[test]
    fn test_empty_filter_means_no_filter() {
        use clap::Parser;

        let cli = Cli::parse_from(["solman", "-c", "-v", "--filterDep", ""]);
        let options = ReportOptions::from(&cli);
        assert_eq!(options.filter, None);

        let mut out = Vec::new();
        render(&inventory(), &options, &mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("PackageA"));
        assert!(printed.contains("1.2.0"));
    }

    #[test]
    fn test_named_filter_is_kept() {
        use clap::Parser;

        let cli = Cli::parse_from(["solman", "-c", "--filterDep", "PackageA"]);
        assert_eq!(ReportOptions::from(&cli).filter.as_deref(), Some("PackageA"));
    }

    #[test]
    fn test_json_contains_requested_views() {
        let options = ReportOptions {
            consolidate: true,
            json: true,
            ..ReportOptions::default()
        };
        let mut out = Vec::new();
        render(&inventory(), &options, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["consolidation"][0]["package"], "PackageA");
        assert!(value.get("framework_usage").is_none());
        assert_eq!(value["inventory"]["projects"][0]["name"], "App");
    }
}
