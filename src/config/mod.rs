//! Configuration loading for the work-log tool.
//!
//! The YAML file names the store location and the report precision. Work
//! settings such as the daily threshold live in the store itself.
//!
//! # Example
//!
//! ```no_run
//! use worklog::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/worklog.yaml").unwrap();
//! println!("Reading entries from {}", config.store_path().display());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_FILE};
pub use types::{AppConfig, DEFAULT_STORE_PATH, StoreConfig};
