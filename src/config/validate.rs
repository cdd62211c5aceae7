// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{DevlaunchError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::DevlaunchError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.app))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_app_location(cfg)?;
    validate_startup_script(cfg)?;
    Ok(())
}

fn validate_app_location(cfg: &RawConfigFile) -> Result<()> {
    if let Some(dir) = &cfg.app.app_location {
        if dir.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(DevlaunchError::ConfigError(
                "[app].app_location must not be empty".to_string(),
            ));
        }
    }
    Ok(())
}

fn validate_startup_script(cfg: &RawConfigFile) -> Result<()> {
    if let Some(script) = &cfg.app.startup_script {
        if script.trim().is_empty() {
            return Err(DevlaunchError::ConfigError(
                "[app].startup_script must not be empty".to_string(),
            ));
        }
    }
    Ok(())
}
