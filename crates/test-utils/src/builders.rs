#![allow(dead_code)]

use std::path::PathBuf;

use devlaunch::config::{AppSection, ConfigFile, RawConfigFile};
use devlaunch::startup::StartupConfig;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                app: AppSection::default(),
            },
        }
    }

    pub fn app_location(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.app.app_location = Some(dir.into());
        self
    }

    pub fn startup_script(mut self, script: &str) -> Self {
        self.config.app.startup_script = Some(script.to_string());
        self
    }

    pub fn build_raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }

    pub fn startup_config(self) -> StartupConfig {
        self.build().startup_config()
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a raw argv token list, starting with a program name.
pub struct ArgvBuilder {
    tokens: Vec<String>,
}

impl ArgvBuilder {
    pub fn new() -> Self {
        Self {
            tokens: vec!["devlaunch".to_string()],
        }
    }

    /// Append one raw token, exactly as given.
    pub fn token(mut self, token: &str) -> Self {
        self.tokens.push(token.to_string());
        self
    }

    /// `--name value` as two tokens.
    pub fn flag(self, name: &str, value: &str) -> Self {
        self.token(name).token(value)
    }

    /// `--name=value` as one token.
    pub fn inline(self, name: &str, value: &str) -> Self {
        let token = format!("{name}={value}");
        self.token(&token)
    }

    pub fn build(self) -> Vec<String> {
        self.tokens
    }
}

impl Default for ArgvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
