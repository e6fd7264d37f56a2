//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! presentation configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::DisplayConfig;

/// Loads and provides access to the presentation configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/
/// └── display.yaml   # Non-finite symbols and currency prefix
/// ```
///
/// # Example
///
/// ```no_run
/// use roi_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// assert_eq!(loader.display().currency_prefix, "$");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    display: DisplayConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if the
    /// file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let display_path = path.join("display.yaml");
        let display = Self::load_yaml::<DisplayConfig>(&display_path)?;

        Ok(Self { display })
    }

    /// Creates a loader with built-in defaults, without touching the
    /// filesystem.
    pub fn with_defaults() -> Self {
        Self {
            display: DisplayConfig::default(),
        }
    }

    /// Returns the display configuration.
    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_directory_is_config_not_found() {
        let result = ConfigLoader::load("/nonexistent/config");
        assert!(matches!(
            result,
            Err(EngineError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_with_defaults_matches_display_default() {
        let loader = ConfigLoader::with_defaults();
        assert_eq!(*loader.display(), DisplayConfig::default());
    }
}
