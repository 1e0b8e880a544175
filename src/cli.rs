// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::graph::OutputFormat;
use crate::types::MatchMode;

/// Command-line arguments for `presubmit-scope`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "presubmit-scope",
    version,
    about = "Schedule dependents tasks for the modules touched by a change list.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the module config file (TOML).
    ///
    /// Default: `Presubmit.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Presubmit.toml")]
    pub config: PathBuf,

    /// File listing changed absolute paths, one per line.
    ///
    /// Without it the tool is inert and emits no manifest.
    #[arg(long, value_name = "PATH")]
    pub changed_files: Option<PathBuf>,

    /// Manifest output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Override `[config].match_mode` (literal-prefix or segment-aware).
    #[arg(long, value_name = "MODE")]
    pub match_mode: Option<MatchMode>,

    /// Also report every module that transitively depends on a touched one.
    #[arg(long)]
    pub with_affected: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PRESUBMIT_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate the config and print the modules; don't read the
    /// change list.
    #[arg(long)]
    pub dry_run: bool,
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
