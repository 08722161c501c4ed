//! Path management for Hisabi
//!
//! Provides XDG-compliant path resolution for the configuration file.
//!
//! ## Path Resolution Order
//!
//! 1. `HISABI_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/hisabi-cli` or `~/.config/hisabi-cli`
//! 3. Windows: `%APPDATA%\hisabi-cli`

use std::path::PathBuf;

use crate::error::HisabiError;

/// Manages all paths used by Hisabi
#[derive(Debug, Clone)]
pub struct HisabiPaths {
    /// Base directory for all Hisabi data
    base_dir: PathBuf,
}

impl HisabiPaths {
    /// Create a new HisabiPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, HisabiError> {
        let base_dir = if let Ok(custom) = std::env::var("HISABI_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create HisabiPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/hisabi-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), HisabiError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| HisabiError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }

    /// Check if Hisabi has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, HisabiError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                HisabiError::Config("Could not determine home directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("hisabi-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, HisabiError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| HisabiError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("hisabi-cli"))
}
