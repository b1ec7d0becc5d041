//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the work-log
//! configuration from a YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::report::ReportOptions;

use super::types::AppConfig;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "worklog.yaml";

/// Loads and provides access to the application configuration.
///
/// # Example
///
/// ```no_run
/// use worklog::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/worklog.yaml").unwrap();
/// println!("Store: {}", loader.store_path().display());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file cannot be read (`ConfigNotFound`)
    /// - The file is not valid YAML for [`AppConfig`] (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config = Self::load_yaml::<AppConfig>(path.as_ref())?;
        Ok(Self { config })
    }

    /// Finds the configuration to use.
    ///
    /// An explicit path must load. Without one, `./worklog.yaml` is loaded if
    /// it exists; otherwise the defaults apply.
    ///
    /// # Example
    ///
    /// ```
    /// use worklog::config::ConfigLoader;
    ///
    /// # let dir = tempfile::tempdir().unwrap();
    /// # std::env::set_current_dir(dir.path()).unwrap();
    /// let loader = ConfigLoader::discover(None)?;
    /// assert_eq!(loader.config().report.day_decimals, 2);
    /// # Ok::<(), worklog::error::EngineError>(())
    /// ```
    pub fn discover(explicit: Option<&Path>) -> EngineResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            return Self::load(&fallback);
        }

        debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        // An empty file is a document with every field defaulted.
        if content.trim().is_empty() {
            return serde_yaml::from_str("{}").map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            });
        }

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the configured store file path.
    pub fn store_path(&self) -> &Path {
        &self.config.store.path
    }

    /// Returns the report display options.
    pub fn report_options(&self) -> ReportOptions {
        self.config.report
    }

    /// Replaces the store path, as the `--store` flag does.
    pub fn with_store_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.store.path = path.into();
        self
    }
}
