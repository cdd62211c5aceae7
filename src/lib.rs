// src/lib.rs

pub mod argv;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod exit;
pub mod fs;
pub mod logging;
pub mod paths;
pub mod startup;
pub mod types;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{ConfigFile, default_config_path, load_and_validate, load_or_default};
use crate::exec::{LaunchOutcome, launch};
use crate::exit::register_process_exit;
use crate::fs::{FileSystem, RealFileSystem};
use crate::startup::{TracingLogger, create_startup_script_command};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and CLI overrides
/// - startup script resolution
/// - exit registration (Ctrl-C / SIGTERM / normal exit → stop the app)
/// - launching the app process
///
/// Returns the exit code the binary should end with.
pub async fn run(args: CliArgs) -> Result<i32> {
    let cfg = load_config(args.config.as_deref())?
        .with_overrides(args.app_location.clone(), args.run.clone());

    let reference = cfg.app.startup_script.clone().ok_or_else(|| {
        anyhow!("no startup script configured; pass --run or set [app].startup_script")
    })?;

    let fs = RealFileSystem;
    let startup_cfg = cfg.startup_config();
    let logger = TracingLogger::new(true);

    let Some(command) = create_startup_script_command(&reference, &startup_cfg, &fs, &logger)
    else {
        return Err(anyhow!(
            "startup script '{reference}' did not resolve to a command"
        ));
    };
    info!(%reference, %command, "resolved startup script");

    if args.dry_run {
        println!("{command}");
        return Ok(0);
    }

    let cwd = app_dir(&cfg, &fs)?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let registration = register_process_exit(move || {
        let _ = shutdown_tx.send(true);
    });

    let outcome = launch(&command, &cwd, shutdown_rx).await?;
    drop(registration);

    debug!(?outcome, "launch finished");
    Ok(match outcome {
        LaunchOutcome::Exited(code) => code,
        LaunchOutcome::Stopped => 130,
    })
}

/// Load the config named on the CLI, or the default one if it exists.
fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    let cfg = match explicit {
        Some(path) => load_and_validate(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => load_or_default(default_config_path())?,
    };
    Ok(cfg)
}

/// Working directory for the launched app: the configured application
/// location (relative to the current directory) or the current directory.
fn app_dir(cfg: &ConfigFile, fs: &dyn FileSystem) -> Result<PathBuf> {
    let cwd = fs.current_dir()?;
    Ok(match cfg.app.app_location.as_deref() {
        Some(dir) => paths::resolve(&cwd, dir),
        None => cwd,
    })
}
