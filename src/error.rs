use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::placement::PlacementError;

/// Problems with the configuration file or its values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level error for a game run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("placement failed: {0}")]
    Placement(#[from] PlacementError),
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}
