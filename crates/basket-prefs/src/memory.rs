//! In-memory preferences.
//!
//! Same contract as [`FilePreferences`](crate::FilePreferences) without a
//! file behind it. Used for tests and for running without a data
//! directory. [`reject_writes`](MemoryPreferences::reject_writes) makes
//! writes fail, for exercising callers' failure paths.

use std::collections::BTreeMap;

use tracing::trace;

use crate::{PreferenceStore, PrefsError, PrefsResult};

/// Preferences held in a map for the lifetime of the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
    reject_writes: bool,
}

impl MemoryPreferences {
    /// Creates an empty preference set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a preference set pre-filled with one value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = BTreeMap::new();
        values.insert(key.to_string(), value.to_string());
        MemoryPreferences {
            values,
            reject_writes: false,
        }
    }

    /// While set, every write fails with `PrefsError::WriteRejected` and
    /// stored values stay as they were.
    pub fn reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }
}

impl PreferenceStore for MemoryPreferences {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> PrefsResult<()> {
        if self.reject_writes {
            return Err(PrefsError::WriteRejected(format!("writes to {key} disabled")));
        }

        trace!(key, bytes = value.len(), "memory preference write");
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut prefs = MemoryPreferences::new();

        prefs.write("k", "one").unwrap();
        prefs.write("k", "two").unwrap();

        assert_eq!(prefs.read("k").as_deref(), Some("two"));
        assert_eq!(prefs.read("other"), None);
    }

    #[test]
    fn test_rejected_write_keeps_value() {
        let mut prefs = MemoryPreferences::with_value("k", "old");

        prefs.reject_writes(true);
        let err = prefs.write("k", "new").unwrap_err();
        assert!(matches!(err, PrefsError::WriteRejected(_)));
        assert_eq!(prefs.read("k").as_deref(), Some("old"));

        prefs.reject_writes(false);
        prefs.write("k", "new").unwrap();
        assert_eq!(prefs.read("k").as_deref(), Some("new"));
    }

    #[test]
    fn test_with_value() {
        let prefs = MemoryPreferences::with_value("shopping_items", "{not valid}");
        assert_eq!(prefs.read("shopping_items").as_deref(), Some("{not valid}"));
    }
}
