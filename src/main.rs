// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! cuesort: Sound Effect Sorter
//!
//! Command-line front end for sorting creature sound effects into
//! entity/action folders.

use clap::{CommandFactory, Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use cuesort::config::AppConfig;
use cuesort::sorter::{FileOutcome, SortOptions, SortReport, Sorter};
use cuesort::{CueSortError, Result};

/// cuesort CLI - Sound Effect Sorter
#[derive(Parser, Debug)]
#[command(name = "cuesort")]
#[command(author = "Jonathan D. A. Jewell <hyperpolymath>")]
#[command(version = "1.0.0")]
#[command(about = "Sort sound effects into entity/action folders", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file (JSON format)
    #[arg(short, long, default_value = "cuesort.json", global = true)]
    config: PathBuf,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable trace logging (most verbose)
    #[arg(long, global = true)]
    trace: bool,

    /// Output format for the run report
    #[arg(long, global = true, default_value = "text", value_parser = ["text", "json", "jsonl"])]
    format: String,

    /// Suppress non-essential output (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify and move every sound file in a directory
    Sort {
        /// Directory holding the unsorted files
        #[arg(env = "CUESORT_ROOT")]
        root: PathBuf,

        /// Dry run mode (don't actually move files)
        #[arg(long)]
        dry_run: bool,

        /// Stop at the first file that cannot be moved
        #[arg(long)]
        fail_fast: bool,
    },

    /// Show where each file would go without moving anything
    Plan {
        /// Directory holding the unsorted files
        #[arg(env = "CUESORT_ROOT")]
        root: PathBuf,
    },

    /// Print the active entity and cue code tables
    Tables,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Generate default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "cuesort.json")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for the report
    let filter = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load(&cli.config)?;

    match cli.command {
        Some(Commands::Sort { root, dry_run, fail_fast }) => {
            run_sort(&config, &root, SortOptions { dry_run, fail_fast }, &cli.format)
        }
        Some(Commands::Plan { root }) => {
            run_sort(&config, &root, SortOptions { dry_run: true, fail_fast: false }, &cli.format)
        }
        Some(Commands::Tables) => run_tables(&config),
        Some(Commands::Config { action }) => run_config_command(config, action),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

/// Run one sort pass and print the report
fn run_sort(config: &AppConfig, root: &Path, options: SortOptions, format: &str) -> Result<()> {
    info!("Sorting {:?}", root);
    if options.dry_run {
        warn!("DRY RUN MODE - files will not be moved");
    }

    let sorter = Sorter::new(config);
    let report = sorter.run(root, options)?;

    print_report(&report, format)?;

    match report.failed() {
        0 => Ok(()),
        failed => Err(CueSortError::Batch { failed }),
    }
}

/// Print a report in the requested format
fn print_report(report: &SortReport, format: &str) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, report, format)?;
    out.flush()?;
    Ok(())
}

/// Render a report. Unknown cues were already logged while sorting, so the
/// text form only counts them.
fn write_report<W: Write>(out: &mut W, report: &SortReport, format: &str) -> Result<()> {
    match format {
        "json" => {
            writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
        }
        "jsonl" => {
            for outcome in &report.outcomes {
                writeln!(out, "{}", serde_json::to_string(outcome)?)?;
            }
        }
        _ => {
            for outcome in &report.outcomes {
                match outcome {
                    FileOutcome::Moved { from, to } => {
                        writeln!(out, "moved    {} -> {}", from.display(), to.display())?
                    }
                    FileOutcome::Planned { from, to } => {
                        writeln!(out, "plan     {} -> {}", from.display(), to.display())?
                    }
                    FileOutcome::Failed { file, error } => {
                        writeln!(out, "failed   {} ({})", file.display(), error)?
                    }
                    FileOutcome::UnknownCue { .. } | FileOutcome::UnknownEntity { .. } => {}
                }
            }
            writeln!(
                out,
                "\n{} moved, {} planned, {} unknown cue, {} unknown entity, {} failed, {} ignored",
                report.moved(),
                report.planned(),
                report.unknown_cues(),
                report.unknown_entities(),
                report.failed(),
                report.ignored,
            )?;
        }
    }
    Ok(())
}

/// Print the active code tables
fn run_tables(config: &AppConfig) -> Result<()> {
    let sorter = Sorter::new(config);
    let router = sorter.router();

    println!("Entity codes ({}):", router.entities().len());
    for (code, name) in router.entities().iter() {
        println!("  {}  {}", code, name);
    }
    println!("\nCue codes ({}):", router.cues().len());
    for (code, action) in router.cues().iter() {
        println!("  {}  {}", code, action);
    }
    Ok(())
}

/// Run config commands
fn run_config_command(config: AppConfig, action: ConfigCommands) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{}", json);
        }
        ConfigCommands::Generate { output } => {
            AppConfig::default().save(&output)?;
            println!("Generated config at {:?}", output);
        }
    }

    Ok(())
}
