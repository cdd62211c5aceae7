// src/startup/resolver.rs

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::fs::FileSystem;
use crate::paths;
use crate::types::PackageManager;

use super::{Logger, ResolveError, ResolvedCommand, StartupConfig};

/// Resolve a startup script reference into a command or an absolute path.
///
/// Any reference containing `:` is read as `binary:script`. Only the first
/// `:` separates the binary, so `npm:build:prod` runs the `build:prod`
/// script. Everything else is a path, resolved against
/// `config.app_location` (or the current directory) and required to exist.
pub fn resolve_startup_script(
    reference: &str,
    config: &StartupConfig,
    fs: &dyn FileSystem,
) -> Result<ResolvedCommand, ResolveError> {
    if let Some((binary, script)) = reference.split_once(':') {
        let manager: PackageManager = binary.parse().map_err(|_| ResolveError::UnresolvedScript {
            binary: binary.to_string(),
        })?;
        let command = manager.command_for(script);
        debug!(%reference, %command, "resolved package manager script");
        return Ok(ResolvedCommand::Shell(command));
    }

    let path = absolute_script_path(reference, config, fs)?;
    if !fs.exists(&path) {
        return Err(ResolveError::ScriptFileMissing {
            reference: reference.to_string(),
            path,
        });
    }

    debug!(%reference, path = %path.display(), "resolved script file");
    Ok(ResolvedCommand::Path(path))
}

/// Resolve `reference`, reporting failures through `logger`.
///
/// - Unknown package managers yield `None` without any diagnostic.
/// - A missing script file is logged once as fatal and yields `None`.
pub fn create_startup_script_command(
    reference: &str,
    config: &StartupConfig,
    fs: &dyn FileSystem,
    logger: &dyn Logger,
) -> Option<ResolvedCommand> {
    match resolve_startup_script(reference, config, fs) {
        Ok(command) => Some(command),
        Err(ResolveError::UnresolvedScript { binary }) => {
            debug!(%reference, %binary, "startup script has no known package manager");
            None
        }
        Err(err) => {
            logger.error(&err.to_string(), true);
            None
        }
    }
}

fn absolute_script_path(
    reference: &str,
    config: &StartupConfig,
    fs: &dyn FileSystem,
) -> Result<PathBuf, ResolveError> {
    let script = Path::new(reference);
    if paths::is_absolute(script) {
        return Ok(paths::normalize(script));
    }

    let cwd = fs
        .current_dir()
        .map_err(|e| ResolveError::BaseDir(e.to_string()))?;
    let base = match config.app_location.as_deref() {
        Some(app_location) => paths::resolve(&cwd, app_location),
        None => cwd,
    };

    Ok(paths::resolve(&base, script))
}
