//! Solman CLI - Command-line interface for Solman
//!
//! Scans a directory tree of `.csproj` projects and reports framework usage,
//! declared NuGet dependencies, and version spread per package.

mod prompt;
mod report;

use anyhow::Result;
use clap::Parser;
use solman_scanner::Scanner;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use report::ReportOptions;

#[derive(Parser, Debug)]
#[command(name = "solman")]
#[command(about = "Solman - .NET framework and NuGet dependency inventory")]
#[command(version)]
struct Cli {
    /// Analyse the .Net framework usage
    #[arg(short = 'f', long = "netFwkVersion")]
    net_fwk_version: bool,

    /// Analyse the project dependencies
    #[arg(short = 'd', long = "dependencies")]
    dependencies: bool,

    /// Provide informations to consolidate dependencies
    #[arg(short = 'c', long = "consolidateDependencies")]
    consolidate_dependencies: bool,

    /// Consolidate a single dependency. Should be used with -c
    #[arg(long = "filterDep", value_name = "NAME")]
    filter_dep: Option<String>,

    /// .Net analysis output file (csv file)
    #[arg(long = "netOutputFile", value_name = "PATH")]
    net_output_file: Option<PathBuf>,

    /// Project dependencies output file (csv file)
    #[arg(long = "nugetOutputFile", value_name = "PATH")]
    nuget_output_file: Option<PathBuf>,

    /// Print to console
    #[arg(short, long)]
    verbose: bool,

    /// The project directory (prompted for when omitted)
    #[arg(short = 'p', long = "projectDirectory", value_name = "DIR")]
    project_directory: Option<PathBuf>,

    /// Abort the whole run when a project's framework cannot be read
    #[arg(long)]
    strict: bool,

    /// Print the inventory and requested views as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Extract projects one at a time
    #[arg(long)]
    sequential: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_env("SOLMAN_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let root = match &cli.project_directory {
        Some(dir) => dir.clone(),
        None => {
            let stdin = io::stdin();
            prompt::prompt_for_directory(&mut stdin.lock(), &mut io::stdout())?
        }
    };

    let scanner = Scanner::new()
        .with_strict(cli.strict)
        .with_parallel(!cli.sequential);
    let inventory = scanner.scan(&root)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if inventory.is_empty() {
        writeln!(out, "No csproj found in {}", root.display())?;
        return Ok(());
    }

    if cli.verbose {
        writeln!(out, "{} csproj founds", inventory.projects.len())?;
    }

    for issue in &inventory.issues {
        eprintln!("warning: {}: {}", issue.project, issue.message);
    }

    let options = ReportOptions::from(cli);
    report::render(&inventory, &options, &mut out)?;
    out.flush()?;

    Ok(())
}
