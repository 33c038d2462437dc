// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod instance;
pub mod logging;
pub mod stats;
pub mod trace;
pub mod types;

use std::path::Path;

use tracing::{debug, info, warn};

use crate::cli::{CliArgs, Command};
use crate::config::ConfigFile;
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};
use crate::instance::{GenerateOptions, GenerationReport};

/// High-level entry point used by `main.rs`.
///
/// Resolves the config, then dispatches the subcommand against the real
/// filesystem.
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = config::resolve(args.config.as_deref())?;
    debug!(?cfg, "effective configuration");
    run_command(&RealFileSystem, &cfg, args.command)
}

/// Execute one subcommand against `fs`.
pub fn run_command(fs: &dyn FileSystem, cfg: &ConfigFile, command: Command) -> Result<()> {
    match command {
        Command::DueDates {
            root,
            keep_going,
            dry_run,
        } => {
            let options = GenerateOptions { keep_going, dry_run };
            let report = instance::generate(fs, &root, &cfg.due_dates, options)?;
            if dry_run {
                print_dry_run(&report);
            }
            log_summary(&root, &report);
            Ok(())
        }
        Command::Plot {
            kind,
            trace,
            output,
        } => {
            trace::plot_trace(fs, kind, &trace, output.as_deref(), &cfg.plot)?;
            Ok(())
        }
        Command::Stats { output, results } => {
            stats::summarize_files(fs, &output, &results, &cfg.stats)?;
            Ok(())
        }
    }
}

fn log_summary(root: &Path, report: &GenerationReport) {
    let outputs: usize = report.processed.iter().map(|r| r.outputs.len()).sum();
    info!(
        ?root,
        processed = report.processed.len(),
        outputs,
        failed = report.failed.len(),
        "due-date generation finished"
    );
    for (path, err) in &report.failed {
        warn!(?path, "not processed: {err}");
    }
}

/// Planned outputs for `due-dates --dry-run`.
fn print_dry_run(report: &GenerationReport) {
    println!("jsp-tools dry-run ({} files)", report.processed.len());
    for file in &report.processed {
        println!(
            "  - {} ({} of {} jobs kept)",
            file.input.display(),
            file.jobs_included,
            file.jobs_declared
        );
        for output in &file.outputs {
            println!("      -> {}", output.display());
        }
    }
    for (path, err) in &report.failed {
        println!("  ! {}: {err}", path.display());
    }
}
