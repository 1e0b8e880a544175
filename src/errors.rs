// src/errors.rs

//! Crate-wide error aliases and helpers.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresubmitError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unable to read config file {path:?}: {source}")]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The change-list file could not be read. Only the presubmit manifest is
    /// abandoned; callers must not fall back to scanning every module.
    #[error("Unable to read presubmit file {path:?}: {source:#}")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Cycle detected in module dependencies: {0}")]
    DependencyCycle(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, PresubmitError>;
