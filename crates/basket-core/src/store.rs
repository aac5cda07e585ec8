//! # Item Store
//!
//! The authoritative in-memory list.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Item Store Operations                                │
//! │                                                                         │
//! │  UI Action               Controller              Store Change           │
//! │  ─────────               ──────────              ────────────           │
//! │                                                                         │
//! │  Add dialog OK ─────────► add() ───────────────► items.push(item)      │
//! │                                                                         │
//! │  Edit dialog OK ────────► update() ────────────► items[i] = item       │
//! │                                                                         │
//! │  Delete / swipe OK ─────► remove_at() ─────────► items.remove(i)       │
//! │                                                                         │
//! │  Startup ───────────────► load_all() ──────────► items = persisted     │
//! │                                                                         │
//! │  Render ────────────────► snapshot() ──────────► (read only)           │
//! │                                                                         │
//! │  NOTE: The store never validates items. It only checks positions.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::types::ShoppingItem;

/// Ordered collection of shopping items addressed by position.
///
/// ## Invariants
/// - Insertion order is display order
/// - A failed operation leaves the list exactly as it was
/// - Removal shifts every later item down by one, so indices held across a
///   removal are stale
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<ShoppingItem>,
}

impl ItemStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        ItemStore { items: Vec::new() }
    }

    /// Appends an item to the end of the list.
    ///
    /// ## Returns
    /// The new length.
    pub fn add(&mut self, item: ShoppingItem) -> usize {
        self.items.push(item);
        self.items.len()
    }

    /// Replaces the item at `index`, keeping its position.
    pub fn update(&mut self, index: usize, item: ShoppingItem) -> CoreResult<()> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or_else(|| CoreError::out_of_range(index, len))?;
        *slot = item;
        Ok(())
    }

    /// Removes the item at `index` and returns it.
    pub fn remove_at(&mut self, index: usize) -> CoreResult<ShoppingItem> {
        if index >= self.items.len() {
            return Err(CoreError::out_of_range(index, self.items.len()));
        }
        Ok(self.items.remove(index))
    }

    /// Replaces the whole list.
    ///
    /// Used at load time only. Items are taken as-is from the persisted
    /// source.
    pub fn replace_all(&mut self, items: Vec<ShoppingItem>) {
        self.items = items;
    }

    /// Read-only view of the current list.
    pub fn snapshot(&self) -> &[ShoppingItem] {
        &self.items
    }

    /// Returns the item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&ShoppingItem> {
        self.items.get(index)
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<ShoppingItem>> for ItemStore {
    fn from(items: Vec<ShoppingItem>) -> Self {
        ItemStore { items }
    }
}
