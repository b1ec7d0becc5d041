//! Configuration types for the work-log tool.
//!
//! These structures are deserialized from the YAML configuration file. Every
//! field has a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::report::ReportOptions;

/// Default location of the store file, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = "worklog-store.json";

/// Where the key-value store lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the JSON store file.
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

/// The complete application configuration.
///
/// Work settings (threshold and rates) are not part of it; they are read from
/// the store alongside the entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Store location.
    pub store: StoreConfig,
    /// Report display precision.
    pub report: ReportOptions,
}
