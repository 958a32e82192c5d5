//! Path management for SmartRx configuration files.
//!
//! ```text
//! ~/.config/smartrx/           # Config directory (platform config dir)
//! └── config.toml              # Application configuration
//! ```

use smartrx_core::{Result, SmartRxError};
use std::path::PathBuf;

/// Environment variable pointing at an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "SMARTRX_CONFIG";

const APP_DIR: &str = "smartrx";
const CONFIG_FILE: &str = "config.toml";

pub struct SmartRxPaths;

impl SmartRxPaths {
    /// Returns the SmartRx configuration directory (e.g. `~/.config/smartrx/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| SmartRxError::config("Cannot find config directory"))
    }

    /// Returns the default configuration file path.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Picks the configuration file to read.
    ///
    /// Priority: explicit path, then `SMARTRX_CONFIG`, then the platform default.
    pub fn resolve_config_file(explicit: Option<PathBuf>) -> Result<PathBuf> {
        Self::resolve_with(explicit, std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
    }

    fn resolve_with(explicit: Option<PathBuf>, from_env: Option<PathBuf>) -> Result<PathBuf> {
        match explicit.or(from_env) {
            Some(path) => Ok(path),
            None => Self::config_file(),
        }
    }
}
