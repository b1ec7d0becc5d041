//! JSON file store.
//!
//! The file holds one JSON object mapping store keys to values, for example a
//! dump of the browser's local storage:
//!
//! ```json
//! {
//!   "worklog.entries.v2": "[{\"date\":\"2025-06-17\",\"hours\":8}]",
//!   "worklog.settings.v2": { "threshold": 8 }
//! }
//! ```
//!
//! Values may be JSON text in a string (as local storage keeps them) or inline
//! JSON. The file is re-read on every lookup; use [`FileStore::snapshot`] to
//! read entries and settings from one consistent state.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::{KeyValueStore, MemoryStore};

/// A key-value store backed by a JSON object file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store reading from `path`. The file need not exist.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file once and returns its items as a [`MemoryStore`].
    ///
    /// Null values are left out. A missing or corrupt file gives an empty
    /// store.
    pub fn snapshot(&self) -> MemoryStore {
        let mut store = MemoryStore::new();
        for (key, value) in self.read_items().unwrap_or_default() {
            if let Some(text) = item_text(value) {
                store.set_item(key, text);
            }
        }
        store
    }

    fn read_items(&self) -> Option<Map<String, Value>> {
        let path = self.path.display();

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path, "Store file does not exist, treating as empty");
                return None;
            }
            Err(e) => {
                warn!(path = %path, error = %e, "Failed to read store file, treating as empty");
                return None;
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(items)) => Some(items),
            Ok(_) => {
                warn!(path = %path, "Store file is not a JSON object, treating as empty");
                None
            }
            Err(e) => {
                warn!(path = %path, error = %e, "Store file is not valid JSON, treating as empty");
                None
            }
        }
    }
}

fn item_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Null => None,
        inline => Some(inline.to_string()),
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        let mut items = self.read_items()?;
        item_text(items.remove(key)?)
    }
}
