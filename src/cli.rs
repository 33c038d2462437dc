// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `jsp-tools`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "jsp-tools",
    version,
    about = "Helpers for job-shop scheduling experiments: due-date instances, trace plots, result statistics.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `JspTools.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `JSP_TOOLS_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Turn raw instances into due-date variants, one per urgency factor.
    ///
    /// Every matching file under the root is replaced by its variants.
    DueDates {
        /// Directory searched recursively for instance files.
        #[arg(long, value_name = "DIR", default_value = ".")]
        root: PathBuf,

        /// Log and skip files that fail instead of aborting the run.
        #[arg(long)]
        keep_going: bool,

        /// Print the planned outputs, but don't write or delete anything.
        #[arg(long)]
        dry_run: bool,
    },

    /// Plot the quality trace written by a solver.
    Plot {
        #[arg(value_enum)]
        kind: PlotKind,

        /// Solver trace to read.
        #[arg(value_name = "TRACE")]
        trace: PathBuf,

        /// Where to write the SVG chart.
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Summarise makespan and execution time across result files.
    Stats {
        /// Summary file to write.
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Solver result files.
        #[arg(value_name = "RESULT", required = true)]
        results: Vec<PathBuf>,
    },
}

/// Which solver produced the trace.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PlotKind {
    /// Genetic algorithm: average and maximum quality per generation.
    Ga,
    /// Tabu search: quality per iteration.
    Ts,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
