// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `devlaunch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "devlaunch",
    version,
    about = "Resolve an app's startup script and run it until exit.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `devlaunch.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Startup script: `npm:<script>`, `yarn:<script>`, `npx:<bin>` or a
    /// path to a script file. Overrides `[app].startup_script`.
    #[arg(long, value_name = "SCRIPT")]
    pub run: Option<String>,

    /// Base directory for relative script paths. Overrides
    /// `[app].app_location`.
    #[arg(long, value_name = "DIR")]
    pub app_location: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace). Case-insensitive.
    ///
    /// If omitted, `--verbose`, `DEVLAUNCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", ignore_case = true)]
    pub log_level: Option<LogLevel>,

    /// Shorthand for `--log-level debug`.
    #[arg(long)]
    pub verbose: bool,

    /// Resolve the startup script and print it, but don't run anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

impl CliArgs {
    /// Level requested on the command line: `--log-level` wins over
    /// `--verbose` (debug). `None` leaves the choice to `DEVLAUNCH_LOG`.
    pub fn requested_log_level(&self) -> Option<LogLevel> {
        match (self.log_level, self.verbose) {
            (Some(lvl), _) => Some(lvl),
            (None, true) => Some(LogLevel::Debug),
            (None, false) => None,
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
