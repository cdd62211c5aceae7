// src/startup/mod.rs

//! Startup script resolution.
//!
//! A startup script reference is either:
//! - `binary:script` with `binary` one of `npm`, `yarn`, `npx`, which becomes
//!   a package-manager command line, or
//! - a filesystem path, which becomes an absolute path if the file exists.
//!
//! [`resolve_startup_script`] is the typed core. [`create_startup_script_command`]
//! layers the logging contract on top: unknown binaries resolve silently to
//! nothing, missing files are reported once as a fatal error.

pub mod logger;
pub mod resolver;

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub use logger::{Logger, TracingLogger};
pub use resolver::{create_startup_script_command, resolve_startup_script};

/// What a startup script reference resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedCommand {
    /// Package-manager command line, e.g. `npm run build --if-present`.
    Shell(String),
    /// Absolute path to an existing script file.
    Path(PathBuf),
}

impl fmt::Display for ResolvedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedCommand::Shell(cmd) => f.write_str(cmd),
            ResolvedCommand::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Base-directory configuration for relative script paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupConfig {
    /// Directory relative script paths are resolved against. Falls back to
    /// the current working directory when unset.
    pub app_location: Option<PathBuf>,
}

impl StartupConfig {
    pub fn with_app_location(app_location: impl Into<PathBuf>) -> Self {
        Self {
            app_location: Some(app_location.into()),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// `binary:script` where `binary` is not a known package manager.
    #[error("unknown package manager '{binary}' in startup script")]
    UnresolvedScript { binary: String },

    #[error("Script file \"{reference}\" was not found.")]
    ScriptFileMissing { reference: String, path: PathBuf },

    #[error("could not determine base directory: {0}")]
    BaseDir(String),
}
