//! # File Preferences
//!
//! A preference set persisted as one JSON object per file.
//!
//! ## File Layout
//! ```text
//! <data_dir>/shopping_list_prefs.json
//! {
//!   "shopping_items": "[{\"name\":\"Milk\",\"quantity\":2}]"
//! }
//! ```
//!
//! ## Write Path
//! ```text
//! write(key, value)
//!      │
//!      ▼
//! clone map, insert value
//!      │
//!      ▼
//! serialize ──► <name>.json.tmp ──► fsync ──► rename over <name>.json
//!      │                (removed again if any step fails)
//!      │
//!      ▼
//! commit map in memory (only after the rename succeeded)
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{PreferenceStore, PrefsError, PrefsResult};

/// Preferences backed by a JSON file.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Opens the preference set `name` inside `dir`.
    ///
    /// ## Behavior
    /// - Creates `dir` if needed
    /// - Missing file: empty set (first run)
    /// - Unreadable or non-object file: `PrefsError::Corrupt`
    pub fn open(dir: impl AsRef<Path>, name: &str) -> PrefsResult<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| PrefsError::io(dir, e))?;

        let path = dir.join(format!("{name}.json"));
        Self::open_path(path)
    }

    /// Opens a preference file at an explicit path.
    pub fn open_path(path: impl Into<PathBuf>) -> PrefsResult<Self> {
        let path = path.into();

        let values = if path.exists() {
            let contents = fs::read_to_string(&path).map_err(|e| PrefsError::io(&path, e))?;
            let values = Self::parse(&path, &contents)?;
            info!(?path, keys = values.len(), "Loaded preferences");
            values
        } else {
            debug!(?path, "Preference file not found, starting empty");
            BTreeMap::new()
        };

        Ok(FilePreferences { path, values })
    }

    /// Like [`open`](Self::open), but a corrupt file is treated as empty.
    ///
    /// The corrupt contents stay on disk until the next write replaces
    /// them. I/O errors still propagate.
    pub fn open_or_reset(dir: impl AsRef<Path>, name: &str) -> PrefsResult<Self> {
        match Self::open(dir.as_ref(), name) {
            Err(PrefsError::Corrupt { path, reason }) => {
                warn!(?path, %reason, "Preference file corrupt, starting empty");
                Ok(FilePreferences {
                    path,
                    values: BTreeMap::new(),
                })
            }
            other => other,
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(path: &Path, contents: &str) -> PrefsResult<BTreeMap<String, String>> {
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(contents).map_err(|e| PrefsError::Corrupt {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> PrefsResult<()> {
        let contents = serde_json::to_string_pretty(values)?;
        let tmp = self.path.with_extension("json.tmp");

        let mut file = fs::File::create(&tmp).map_err(|e| PrefsError::io(&tmp, e))?;
        let written = file
            .write_all(contents.as_bytes())
            .and_then(|_| file.sync_all());
        drop(file);

        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(PrefsError::io(&tmp, e));
        }

        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            PrefsError::io(&self.path, e)
        })
    }
}

impl PreferenceStore for FilePreferences {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> PrefsResult<()> {
        let mut next = self.values.clone();
        next.insert(key.to_string(), value.to_string());

        self.persist(&next)?;
        self.values = next;

        debug!(path = ?self.path, key, bytes = value.len(), "Preference written");
        Ok(())
    }
}
