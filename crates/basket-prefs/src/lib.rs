//! # basket-prefs: Preference Storage for Basket
//!
//! A small key-value store for string values, modeled on a mobile
//! platform's shared-preferences file: a named set of keys, each holding
//! one string, read once at open and rewritten whole on every write.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Basket Data Flow                                 │
//! │                                                                         │
//! │  ShoppingList::add / update / remove_at                                │
//! │       │  codec::encode(items)                                           │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   basket-prefs (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────────────────┐        ┌──────────────────────────┐  │   │
//! │  │   │  PreferenceStore    │◄───────│  FilePreferences          │  │   │
//! │  │   │  read(key)          │        │  <dir>/<name>.json        │  │   │
//! │  │   │  write(key, value)  │◄───────│  MemoryPreferences        │  │   │
//! │  │   └─────────────────────┘        └──────────────────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ~/.local/share/basket/shopping_list_prefs.json                        │
//! │  { "shopping_items": "[{\"name\":\"Milk\",\"quantity\":2}]" }          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`file`] - JSON-file backed preferences
//! - [`memory`] - In-memory preferences
//! - [`error`] - Preference error types
//!
//! ## Usage
//!
//! ```rust
//! use basket_prefs::{MemoryPreferences, PreferenceStore};
//!
//! let mut prefs = MemoryPreferences::new();
//! assert_eq!(prefs.read("shopping_items"), None);
//!
//! prefs.write("shopping_items", "[]").unwrap();
//! assert_eq!(prefs.read("shopping_items").as_deref(), Some("[]"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod file;
pub mod memory;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{PrefsError, PrefsResult};
pub use file::FilePreferences;
pub use memory::MemoryPreferences;

// =============================================================================
// Preference Store Trait
// =============================================================================

/// A durable set of string values under string keys.
///
/// ## Contract
/// - `read` never fails: values are loaded when the store is opened
/// - `write` is synchronous and replaces the previous value
/// - One writer, last write wins
pub trait PreferenceStore {
    /// Returns the value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    fn write(&mut self, key: &str, value: &str) -> PrefsResult<()>;
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for Box<P> {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> PrefsResult<()> {
        (**self).write(key, value)
    }
}
