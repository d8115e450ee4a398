// error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Failed registry lookup. Recovered by the console, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Command not found: {raw}. Type 'help' for available commands.")]
    UnrecognizedCommand { raw: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("tick_ms must be greater than zero")]
    InvalidTick,
}
