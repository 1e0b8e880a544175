// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{PresubmitError, Result};

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| PresubmitError::ConfigUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path, validate it and resolve relative
/// module roots against the directory holding the file.
///
/// Checks for:
/// - at least one `[module.<name>]`,
/// - non-empty task names and module roots,
/// - unknown or self `depends_on` references,
/// - dependency cycles between modules.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let raw_config = load_from_path(path)?;
    let mut config = ConfigFile::try_from(raw_config)?;
    config.resolve_roots(&config_root_dir(path)?);
    debug!(modules = config.module.len(), ?path, "loaded module configuration");
    Ok(config)
}

/// Absolute directory that relative module roots are resolved against.
///
/// Roots are compared as strings against absolute changed paths, so the
/// result is always absolute and free of `.` components:
/// - "configs/Presubmit.toml" resolves against "<cwd>/configs".
/// - A bare "Presubmit.toml" (parent = "") resolves against "<cwd>".
fn config_root_dir(config_path: &Path) -> Result<PathBuf> {
    let parent = match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if parent.is_absolute() {
        return Ok(parent.components().collect());
    }
    let cwd = std::env::current_dir().map_err(|source| PresubmitError::ConfigUnreadable {
        path: config_path.to_path_buf(),
        source,
    })?;
    Ok(cwd.join(parent).components().collect())
}
