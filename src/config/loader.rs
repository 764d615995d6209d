//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::DaylogConfig;
use crate::config::validator::validate;
use crate::error::{DaylogError, Result};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".daylog.yml";

/// Find `.daylog.yml` in `dir`.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load and validate a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<DaylogConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DaylogError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DaylogError::Io(e)
        }
    })?;

    let config = parse_config(&content, path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse YAML content into a [`DaylogConfig`].
pub fn parse_config(content: &str, source_path: &Path) -> Result<DaylogConfig> {
    serde_yaml::from_str(content).map_err(|e| DaylogError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit path must exist. Without one, `.daylog.yml` in `dir` is used
/// if present, else the defaults.
pub fn load_config(dir: &Path, config_override: Option<&Path>) -> Result<DaylogConfig> {
    if let Some(path) = config_override {
        return load_config_file(path);
    }
    match find_config(dir) {
        Some(path) => {
            tracing::debug!("Using config {}", path.display());
            load_config_file(&path)
        }
        None => Ok(DaylogConfig::default()),
    }
}
