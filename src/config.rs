// config.rs

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;
use crate::history::RenderStyle;

/// Names the settings file, like `HISTFILE` does for a shell.
pub const CONFIG_ENV: &str = "PORTFOLIO_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// `user@host:dir` shown next to the clock.
    pub identity: String,
    pub prompt: String,
    pub tick_ms: u64,
    pub color: bool,
    pub clock: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            identity: "satvik@shankar:~".to_string(),
            prompt: "$".to_string(),
            tick_ms: 1000,
            color: true,
            clock: true,
        }
    }
}

impl Settings {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let settings = Self::from_toml_str(&text)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Defaults unless `PORTFOLIO_CONFIG` names a file.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::InvalidTick);
        }
        Ok(())
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn render_style(&self) -> RenderStyle {
        RenderStyle { prompt: self.prompt.clone(), color: self.color }
    }
}
