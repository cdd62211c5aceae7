// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::startup::StartupConfig;

/// Configuration exactly as deserialized from TOML.
///
/// ```toml
/// [app]
/// app_location = "./app"
/// startup_script = "npm:dev"
/// ```
///
/// All sections are optional. Use [`ConfigFile`] (via `TryFrom`) for a
/// validated view.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub app: AppSection,
}

/// `[app]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppSection {
    /// Base directory for relative startup script paths, and the working
    /// directory of the launched command.
    #[serde(default)]
    pub app_location: Option<PathBuf>,

    /// Startup script reference: `npm:<script>`, `yarn:<script>`,
    /// `npx:<bin>`, or a path to a script file.
    #[serde(default)]
    pub startup_script: Option<String>,
}

/// Validated configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub app: AppSection,
}

impl ConfigFile {
    /// Construct without validation. Callers outside this module should go
    /// through `TryFrom<RawConfigFile>`.
    pub(crate) fn new_unchecked(app: AppSection) -> Self {
        Self { app }
    }

    /// Layer CLI overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        app_location: Option<PathBuf>,
        startup_script: Option<String>,
    ) -> Self {
        if app_location.is_some() {
            self.app.app_location = app_location;
        }
        if startup_script.is_some() {
            self.app.startup_script = startup_script;
        }
        self
    }

    pub fn startup_config(&self) -> StartupConfig {
        StartupConfig {
            app_location: self.app.app_location.clone(),
        }
    }
}
