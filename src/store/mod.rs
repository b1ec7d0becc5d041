//! Entry and settings store readers.
//!
//! Entries and settings live in a browser-style key-value store: each key
//! holds a JSON document as text. The readers here are tolerant by contract.
//! An absent key, unparseable JSON or a value of the wrong shape yields an
//! empty entry list or default settings, never an error.
//!
//! # Example
//!
//! ```
//! use worklog::store::{load_entries, load_settings, MemoryStore, ENTRIES_KEY, SETTINGS_KEY};
//! use rust_decimal::Decimal;
//!
//! let mut store = MemoryStore::new();
//! store.set_item(ENTRIES_KEY, r#"[{"date":"2025-06-17","hours":"7.5"},{"date":"bogus"}]"#);
//! store.set_item(SETTINGS_KEY, "{not json");
//!
//! let entries = load_entries(&store);
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].hours, Decimal::new(75, 1));
//! assert_eq!(load_settings(&store).threshold, Decimal::from(8));
//! ```

mod coerce;
mod file;
mod memory;

use serde_json::Value;
use tracing::{debug, warn};

use crate::models::{Settings, TimeEntry};

pub use coerce::{
    MAX_HOURS, MAX_RATE, coerce_bounded, coerce_decimal, coerce_hours, entry_from_value,
    settings_from_value,
};
pub use file::FileStore;
pub use memory::MemoryStore;

/// Key holding the JSON array of time entries.
pub const ENTRIES_KEY: &str = "worklog.entries.v2";

/// Key holding the JSON settings object.
pub const SETTINGS_KEY: &str = "worklog.settings.v2";

/// A read-only key-value store of JSON text values.
pub trait KeyValueStore {
    /// Returns the raw text stored under `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;
}

/// Loads all time entries, in stored order.
///
/// Elements that are not objects or lack a valid date are skipped.
pub fn load_entries<S: KeyValueStore + ?Sized>(store: &S) -> Vec<TimeEntry> {
    let Some(value) = read_json(store, ENTRIES_KEY) else {
        return Vec::new();
    };

    let Value::Array(items) = value else {
        warn!(key = ENTRIES_KEY, "Stored entries are not a JSON array, ignoring");
        return Vec::new();
    };

    let entries: Vec<TimeEntry> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let entry = entry_from_value(item);
            if entry.is_none() {
                warn!(index, "Skipping stored entry without a valid date");
            }
            entry
        })
        .collect();

    debug!(stored = items.len(), loaded = entries.len(), "Loaded entries");
    entries
}

/// Loads the settings, merged over the defaults.
pub fn load_settings<S: KeyValueStore + ?Sized>(store: &S) -> Settings {
    read_json(store, SETTINGS_KEY)
        .map(|value| settings_from_value(&value))
        .unwrap_or_default()
}

fn read_json<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<Value> {
    let raw = store.get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "Stored value is not valid JSON, ignoring");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn store_with(entries: Option<&str>, settings: Option<&str>) -> MemoryStore {
        let mut store = MemoryStore::new();
        if let Some(entries) = entries {
            store.set_item(ENTRIES_KEY, entries);
        }
        if let Some(settings) = settings {
            store.set_item(SETTINGS_KEY, settings);
        }
        store
    }

    #[test]
    fn test_empty_store_yields_defaults() {
        let store = MemoryStore::new();
        assert!(load_entries(&store).is_empty());
        assert_eq!(load_settings(&store), Settings::default());
    }

    #[test]
    fn test_corrupt_entries_yield_empty_list() {
        let store = store_with(Some("[{\"date\":"), None);
        assert!(load_entries(&store).is_empty());
    }

    #[test]
    fn test_non_array_entries_yield_empty_list() {
        for raw in ["null", "{}", "42", "\"2025-06-17\""] {
            let store = store_with(Some(raw), None);
            assert!(load_entries(&store).is_empty(), "{raw}");
        }
    }

    #[test]
    fn test_entries_keep_stored_order() {
        let store = store_with(
            Some(
                r#"[
                    {"date": "2025-06-18", "hours": 2, "activity": "b"},
                    {"date": "2025-06-17", "hours": 3, "activity": "a"},
                    {"date": "2025-06-18", "hours": 1, "activity": "c"}
                ]"#,
            ),
            None,
        );
        let activities: Vec<String> = load_entries(&store)
            .into_iter()
            .filter_map(|e| e.activity)
            .collect();
        assert_eq!(activities, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_malformed_elements_are_skipped() {
        let store = store_with(
            Some(r#"[null, 5, {"hours": 3}, {"date": "2025-06-17", "hours": "x"}]"#),
            None,
        );
        let entries = load_entries(&store);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].hours, Decimal::ZERO);
    }

    #[test]
    fn test_partial_settings_merge() {
        let store = store_with(None, Some(r#"{"threshold": "7.5"}"#));
        let settings = load_settings(&store);
        assert_eq!(settings.threshold, Decimal::new(75, 1));
        assert_eq!(settings.rate, Decimal::ZERO);
    }

    #[test]
    fn test_corrupt_settings_yield_defaults() {
        let store = store_with(None, Some("{threshold: 6"));
        assert_eq!(load_settings(&store), Settings::default());
    }

    #[test]
    fn test_trait_object_store() {
        let store = store_with(Some(r#"[{"date": "2025-06-17", "hours": 1}]"#), None);
        let dyn_store: &dyn KeyValueStore = &store;
        assert_eq!(load_entries(dyn_store).len(), 1);
    }
}
