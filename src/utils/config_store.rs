//! ConfigStore - Settings Files on Disk
//!
//! TOML files in the platform configuration directory, resolved through
//! `ProjectDirs` (XDG paths on Linux).

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{Error, Result};

/// Resolve the catalog's configuration directory, creating it on first use
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs =
        ProjectDirs::from("dev", "beacon", "beacon-ui").ok_or(Error::NoConfigDir)?;
    let config_dir = project_dirs.config_dir();
    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }
    Ok(config_dir.to_path_buf())
}

fn config_file_path(filename: &str) -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(filename))
}

/// Load a TOML config file, falling back to defaults when it is missing
/// or empty
pub fn load_config<T: DeserializeOwned + Default>(filename: &str) -> Result<T> {
    let path = config_file_path(filename)?;
    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(&path)?;
    if content.trim().is_empty() {
        return Ok(T::default());
    }

    Ok(toml::from_str(&content)?)
}

/// Write a TOML config file, replacing any previous contents
pub fn save_config<T: Serialize>(filename: &str, config: &T) -> Result<()> {
    let path = config_file_path(filename)?;
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}
