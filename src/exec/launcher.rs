// src/exec/launcher.rs

//! Startup command process runner.

use std::path::Path;
use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::startup::ResolvedCommand;

use super::shell::{shell_command, shell_line};

/// How a launched command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The process exited on its own with this code (`-1` when killed by a
    /// signal we did not send).
    Exited(i32),
    /// Shutdown was requested and the process was killed.
    Stopped,
}

/// Run `command` in `cwd` until it exits or `shutdown` flips to `true`.
///
/// stdio is inherited so the app owns the terminal. If the shutdown sender
/// is dropped without requesting shutdown, the child simply runs to
/// completion.
pub async fn launch(
    command: &ResolvedCommand,
    cwd: &Path,
    mut shutdown: watch::Receiver<bool>,
) -> Result<LaunchOutcome> {
    if *shutdown.borrow() {
        debug!("shutdown requested before launch; not starting process");
        return Ok(LaunchOutcome::Stopped);
    }

    let line = shell_line(command);
    info!(cmd = %line, cwd = %cwd.display(), "starting app process");

    let mut cmd = shell_command(&line);
    cmd.current_dir(cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);

    let mut child = cmd
        .spawn()
        .with_context(|| format!("spawning process for '{line}'"))?;

    let mut shutdown_open = true;
    loop {
        tokio::select! {
            status_res = child.wait() => {
                let status = status_res
                    .with_context(|| format!("waiting for process of '{line}'"))?;
                let code = status.code().unwrap_or(-1);
                info!(exit_code = code, success = status.success(), "app process exited");
                return Ok(LaunchOutcome::Exited(code));
            }

            changed = shutdown.changed(), if shutdown_open => {
                if changed.is_err() {
                    debug!("shutdown channel closed; waiting for app process");
                    shutdown_open = false;
                    continue;
                }
                if !*shutdown.borrow() {
                    continue;
                }

                info!("shutdown requested; killing app process");
                if let Err(e) = child.kill().await {
                    warn!(error = %e, "failed to kill app process on shutdown");
                }
                return Ok(LaunchOutcome::Stopped);
            }
        }
    }
}
