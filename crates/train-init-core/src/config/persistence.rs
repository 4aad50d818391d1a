//! YAML persistence for [`Config`]

use super::model::Config;
use crate::error::{InitError, InitResult};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Serialize `config` as YAML at `path`, creating parent directories as needed
pub fn save_config(path: &Path, config: &Config) -> InitResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            InitError::io_with_path(
                format!("Failed to create directory: {}", e),
                parent.display().to_string(),
            )
        })?;
    }

    let yaml = serde_yaml::to_string(config)?;
    fs::write(path, yaml).map_err(|e| {
        InitError::io_with_path(format!("Failed to write config: {}", e), path.display().to_string())
    })?;

    info!("Saved config to {}", path.display());
    Ok(())
}

/// Read a YAML config previously written by [`save_config`]
pub fn load_config(path: &Path) -> InitResult<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        InitError::io_with_path(format!("Failed to read config: {}", e), path.display().to_string())
    })?;
    debug!("Loaded {} bytes from {}", content.len(), path.display());
    Ok(serde_yaml::from_str(&content)?)
}
