use std::{io, path::PathBuf};

use certreg_registry::PolicyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid access policy: {0}")]
    Policy(#[from] PolicyError),

    #[error("invalid log level {0:?}")]
    InvalidLevel(String),
}
