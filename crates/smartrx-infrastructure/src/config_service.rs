//! Configuration service implementation.
//!
//! Loads [`AppConfig`] from `config.toml` and applies environment overrides.

use crate::paths::SmartRxPaths;
use smartrx_core::config::AppConfig;
use smartrx_core::{Result, SmartRxError};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

/// Environment variable overriding `[logging] level`.
pub const LOG_LEVEL_ENV: &str = "SMARTRX_LOG";

/// Configuration service that loads and caches the application configuration.
///
/// A missing file is not an error: defaults are used. An unreadable or
/// malformed file is.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit file path; `None` falls back to `SMARTRX_CONFIG` and the
    /// platform default.
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<AppConfig> {
        {
            let read_lock = self.config.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let path = SmartRxPaths::resolve_config_file(self.path.clone())?;
        let mut loaded = Self::load_from_file(&path)?;
        apply_env_overrides(&mut loaded, std::env::var(LOG_LEVEL_ENV).ok());

        {
            let mut write_lock = self.config.write().unwrap_or_else(PoisonError::into_inner);
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *write_lock = None;
    }

    /// Reads a TOML configuration file, returning defaults if it does not exist.
    pub fn load_from_file(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            SmartRxError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Applies environment-provided overrides on top of file values.
fn apply_env_overrides(config: &mut AppConfig, log_level: Option<String>) {
    if let Some(level) = log_level.filter(|l| !l.trim().is_empty()) {
        config.logging.level = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigService::load_from_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_reads_file_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[market]\ndefault_market = \"saudi\"\n\n[session]\nuser_role = \"Organization\""
        )
        .unwrap();

        let service = ConfigService::new(Some(file.path().to_path_buf()));
        let config = service.get_config().unwrap();
        assert_eq!(config.market.default_market, "saudi");
        assert_eq!(config.session.user_role, "Organization");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[market\ndefault_market = ").unwrap();

        let err = ConfigService::load_from_file(file.path()).unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_config_is_cached_until_invalidated() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[market]\ndefault_market = \"uae\"").unwrap();
        let service = ConfigService::new(Some(file.path().to_path_buf()));
        assert_eq!(service.get_config().unwrap().market.default_market, "uae");

        std::fs::write(file.path(), "[market]\ndefault_market = \"qatar\"\n").unwrap();
        assert_eq!(service.get_config().unwrap().market.default_market, "uae");

        service.invalidate_cache();
        assert_eq!(service.get_config().unwrap().market.default_market, "qatar");
    }

    #[test]
    fn test_env_override_replaces_level() {
        let mut config = AppConfig::default();
        apply_env_overrides(&mut config, Some("debug".to_string()));
        assert_eq!(config.logging.level, "debug");

        apply_env_overrides(&mut config, Some("  ".to_string()));
        assert_eq!(config.logging.level, "debug");

        apply_env_overrides(&mut config, None);
        assert_eq!(config.logging.level, "debug");
    }
}
