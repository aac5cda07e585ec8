//! # Shopping List State
//!
//! The top-level controller. Owns the item store and the preference slot
//! for the lifetime of the app.
//!
//! ## Mutation Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Every Mutation                                       │
//! │                                                                         │
//! │   add / update / remove_at                                              │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   keep a copy of the current list                                       │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   ItemStore mutation ─── IndexOutOfRange? ──► return, nothing changed   │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   codec::encode(whole list) ──► prefs.write(items_key)                  │
//! │        │                              │                                 │
//! │        │                        write failed? ──► restore copy, return  │
//! │        ▼                                                                │
//! │   notify listeners (change, items)                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Threading
//! None. Mutations take `&mut self`, so exactly one runs at a time. The
//! write is synchronous: when a call returns, storage and memory agree.
//!
//! A position captured by the UI is only good until the next mutation.
//! Every successful mutation and every reload bumps a generation counter,
//! and a [`PendingDeletion`] from an older generation is refused.

use basket_core::{codec, CoreError, ItemStore, ShoppingItem};
use basket_prefs::PreferenceStore;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::listener::{ListChange, ListListener};
use crate::error::{AppError, AppResult};

/// Pre-filled contents for the edit dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditDraft {
    pub index: usize,
    pub name: String,
    pub quantity: String,
}

/// A swipe-to-delete awaiting confirmation.
///
/// Holds the position captured at swipe time and the list generation it
/// belongs to. Consumed by [`ShoppingList::confirm_delete`] or
/// [`ShoppingList::cancel_delete`].
#[derive(Debug, PartialEq, Eq)]
pub struct PendingDeletion {
    index: usize,
    generation: u64,
}

impl PendingDeletion {
    /// Position the swipe happened on.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// The shopping list controller.
pub struct ShoppingList {
    store: ItemStore,
    prefs: Box<dyn PreferenceStore>,
    items_key: String,
    listeners: Vec<Box<dyn ListListener>>,
    /// Bumped on every committed mutation and reload.
    generation: u64,
}

impl ShoppingList {
    /// Creates the controller and loads whatever is persisted.
    pub fn open(prefs: impl PreferenceStore + 'static, items_key: impl Into<String>) -> Self {
        let mut list = ShoppingList {
            store: ItemStore::new(),
            prefs: Box::new(prefs),
            items_key: items_key.into(),
            listeners: Vec::new(),
            generation: 0,
        };
        list.load_all();
        list
    }

    /// Registers a listener for list changes.
    pub fn subscribe(&mut self, listener: impl ListListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // =========================================================================
    // Load
    // =========================================================================

    /// Replaces the in-memory list with the persisted one.
    ///
    /// ## Recovery
    /// - No saved value: empty list (first run)
    /// - Malformed value: empty list, logged, never an error
    ///
    /// The malformed value is left in storage until the next mutation
    /// overwrites it.
    pub fn load_all(&mut self) -> &[ShoppingItem] {
        let items = match self.prefs.read(&self.items_key) {
            None => {
                debug!(key = %self.items_key, "No saved list, starting empty");
                Vec::new()
            }
            Some(text) => codec::decode(&text).unwrap_or_else(|e| {
                warn!(key = %self.items_key, error = %e, "Saved list unreadable, starting empty");
                Vec::new()
            }),
        };

        info!(count = items.len(), "Shopping list loaded");
        self.store.replace_all(items);
        self.generation += 1;
        self.notify(ListChange::Reloaded);
        self.store.snapshot()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Validates and appends an item.
    ///
    /// ## Returns
    /// Position of the new item.
    pub fn add(&mut self, name: &str, quantity: i64) -> AppResult<usize> {
        let item = ShoppingItem::new(name, quantity)?;
        self.add_item(item)
    }

    /// Appends an item built by [`ShoppingItem::new`] or
    /// [`ShoppingItem::from_input`].
    pub(crate) fn add_item(&mut self, item: ShoppingItem) -> AppResult<usize> {
        let before = self.store.snapshot().to_vec();
        debug!(name = %item.name, quantity = item.quantity, "Adding item");

        let index = self.store.add(item) - 1;
        self.commit(before, ListChange::Inserted(index))?;
        Ok(index)
    }

    /// Validates and replaces the item at `index`.
    pub fn update(&mut self, index: usize, name: &str, quantity: i64) -> AppResult<()> {
        let item = ShoppingItem::new(name, quantity)?;
        self.update_item(index, item)
    }

    /// Replaces the item at `index` with an already-validated item.
    pub(crate) fn update_item(&mut self, index: usize, item: ShoppingItem) -> AppResult<()> {
        let before = self.store.snapshot().to_vec();
        debug!(index, name = %item.name, quantity = item.quantity, "Updating item");

        self.store.update(index, item)?;
        self.commit(before, ListChange::Changed(index))
    }

    /// Removes the item at `index`.
    ///
    /// ## Returns
    /// The removed item, so the UI can name it in its confirmation.
    pub fn remove_at(&mut self, index: usize) -> AppResult<ShoppingItem> {
        let before = self.store.snapshot().to_vec();

        let removed = self.store.remove_at(index)?;
        debug!(index, name = %removed.name, "Removed item");

        self.commit(before, ListChange::Removed(index))?;
        Ok(removed)
    }

    // =========================================================================
    // Dialog Flows
    // =========================================================================

    /// Current values of the item at `index`, for pre-filling the edit dialog.
    pub fn edit_draft(&self, index: usize) -> AppResult<EditDraft> {
        let item = self.require(index)?;
        Ok(EditDraft {
            index,
            name: item.name.clone(),
            quantity: item.quantity_text(),
        })
    }

    /// Captures the position of a swiped row and asks for confirmation.
    pub fn begin_swipe_delete(&self, index: usize) -> AppResult<PendingDeletion> {
        self.require(index)?;
        debug!(index, "Swipe delete awaiting confirmation");
        Ok(PendingDeletion {
            index,
            generation: self.generation,
        })
    }

    /// User confirmed: removes the item at the captured position.
    ///
    /// ## Errors
    /// `AppError::StaleDeletion` if the list changed since the swipe. Nothing
    /// is removed in that case.
    pub fn confirm_delete(&mut self, pending: PendingDeletion) -> AppResult<ShoppingItem> {
        if pending.generation != self.generation {
            warn!(index = pending.index, "List changed since swipe, delete refused");
            return Err(AppError::StaleDeletion {
                index: pending.index,
            });
        }

        self.remove_at(pending.index)
    }

    /// User cancelled: nothing is removed, the swiped row is redrawn.
    ///
    /// If the list changed since the swipe, the whole list is redrawn.
    pub fn cancel_delete(&mut self, pending: PendingDeletion) {
        debug!(index = pending.index, "Swipe delete cancelled");

        if pending.generation == self.generation {
            self.notify(ListChange::Changed(pending.index));
        } else {
            self.notify(ListChange::Reloaded);
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Read-only view of the current list.
    pub fn items(&self) -> &[ShoppingItem] {
        self.store.snapshot()
    }

    /// Returns the item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&ShoppingItem> {
        self.store.get(index)
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Checks if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn require(&self, index: usize) -> AppResult<&ShoppingItem> {
        self.store
            .get(index)
            .ok_or_else(|| CoreError::out_of_range(index, self.store.len()).into())
    }

    /// Writes the whole list, rolling back to `before` if that fails.
    fn commit(&mut self, before: Vec<ShoppingItem>, change: ListChange) -> AppResult<()> {
        if let Err(e) = self.save() {
            warn!(error = %e, "Save failed, rolling back");
            self.store.replace_all(before);
            return Err(e);
        }

        self.generation += 1;
        self.notify(change);
        Ok(())
    }

    fn save(&mut self) -> AppResult<()> {
        let text = codec::encode(self.store.snapshot())?;
        self.prefs.write(&self.items_key, &text)?;
        debug!(count = self.store.len(), "Shopping list saved");
        Ok(())
    }

    fn notify(&self, change: ListChange) {
        let items = self.store.snapshot();
        for listener in &self.listeners {
            listener.on_change(change, items);
        }
    }
}

impl std::fmt::Debug for ShoppingList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShoppingList")
            .field("items", &self.store.snapshot())
            .field("items_key", &self.items_key)
            .field("listeners", &self.listeners.len())
            .field("generation", &self.generation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use basket_core::{ValidationError, DEFAULT_ITEMS_KEY};
    use basket_prefs::{FilePreferences, MemoryPreferences, PrefsResult};

    use super::*;

    /// Shares one memory store between the list and the test.
    #[derive(Clone, Default)]
    struct SharedPrefs {
        inner: Rc<RefCell<MemoryPreferences>>,
    }

    impl SharedPrefs {
        fn saved_items(&self) -> Vec<ShoppingItem> {
            let text = self.inner.borrow().read(DEFAULT_ITEMS_KEY).unwrap();
            codec::decode(&text).unwrap()
        }
    }

    impl PreferenceStore for SharedPrefs {
        fn read(&self, key: &str) -> Option<String> {
            self.inner.borrow().read(key)
        }

        fn write(&mut self, key: &str, value: &str) -> PrefsResult<()> {
            self.inner.borrow_mut().write(key, value)
        }
    }

    fn item(name: &str, quantity: i64) -> ShoppingItem {
        ShoppingItem {
            name: name.to_string(),
            quantity,
        }
    }

    fn list_with(items: &[ShoppingItem]) -> (ShoppingList, SharedPrefs) {
        let prefs = SharedPrefs::default();
        prefs
            .inner
            .borrow_mut()
            .write(DEFAULT_ITEMS_KEY, &codec::encode(items).unwrap())
            .unwrap();
        (ShoppingList::open(prefs.clone(), DEFAULT_ITEMS_KEY), prefs)
    }

    fn record_changes(list: &mut ShoppingList) -> Rc<RefCell<Vec<ListChange>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        list.subscribe(move |change: ListChange, _: &[ShoppingItem]| {
            sink.borrow_mut().push(change)
        });
        seen
    }

    #[test]
    fn test_add_to_empty_list() {
        let (mut list, prefs) = list_with(&[]);

        let index = list.add("Milk", 2).unwrap();

        assert_eq!(index, 0);
        assert_eq!(list.items(), &[item("Milk", 2)]);
        assert_eq!(prefs.saved_items(), list.items());
    }

    #[test]
    fn test_update_changes_only_target() {
        let (mut list, prefs) = list_with(&[item("Milk", 2), item("Bread", 1)]);

        list.update(1, "Bread", 3).unwrap();

        assert_eq!(list.items(), &[item("Milk", 2), item("Bread", 3)]);
        assert_eq!(prefs.saved_items(), list.items());
    }

    #[test]
    fn test_remove_shifts_and_persists() {
        let (mut list, prefs) =
            list_with(&[item("Milk", 2), item("Bread", 1), item("Eggs", 6)]);

        let removed = list.remove_at(0).unwrap();

        assert_eq!(removed, item("Milk", 2));
        assert_eq!(list.items(), &[item("Bread", 1), item("Eggs", 6)]);
        assert_eq!(prefs.saved_items(), list.items());
    }

    #[test]
    fn test_update_out_of_range_leaves_list_unchanged() {
        let (mut list, prefs) = list_with(&[item("Milk", 2), item("Bread", 1)]);
        let seen = record_changes(&mut list);

        let err = list.update(5, "Eggs", 6).unwrap_err();

        assert!(matches!(
            err,
            AppError::Core(CoreError::IndexOutOfRange { index: 5, len: 2 })
        ));
        assert_eq!(list.items(), &[item("Milk", 2), item("Bread", 1)]);
        assert_eq!(prefs.saved_items(), list.items());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_invalid_input_rejected_before_mutation() {
        let (mut list, _prefs) = list_with(&[item("Milk", 2)]);

        for (name, quantity) in [("", 3), ("Milk", 0), ("Milk", -1)] {
            let err = list.add(name, quantity).unwrap_err();
            assert!(matches!(
                err,
                AppError::Core(CoreError::Validation(
                    ValidationError::Required { .. } | ValidationError::MustBePositive { .. }
                ))
            ));
            assert_eq!(list.len(), 1);
        }
    }

    #[test]
    fn test_malformed_saved_list_loads_empty() {
        let prefs = MemoryPreferences::with_value(DEFAULT_ITEMS_KEY, "{not valid}");

        let list = ShoppingList::open(prefs, DEFAULT_ITEMS_KEY);

        assert!(list.is_empty());
    }

    #[test]
    fn test_missing_saved_list_loads_empty() {
        let list = ShoppingList::open(MemoryPreferences::new(), DEFAULT_ITEMS_KEY);
        assert!(list.is_empty());
    }

    #[test]
    fn test_load_all_is_idempotent() {
        let (mut list, _prefs) = list_with(&[item("Milk", 2), item("Bread", 1)]);

        let first = list.load_all().to_vec();
        let second = list.load_all().to_vec();

        assert_eq!(first, second);
        assert_eq!(first, vec![item("Milk", 2), item("Bread", 1)]);
    }

    #[test]
    fn test_every_mutation_is_written() {
        let (mut list, prefs) = list_with(&[]);

        list.add("Milk", 2).unwrap();
        assert_eq!(prefs.saved_items(), list.items());

        list.add("Bread", 1).unwrap();
        assert_eq!(prefs.saved_items(), list.items());

        list.update(0, "Milk", 4).unwrap();
        assert_eq!(prefs.saved_items(), list.items());

        list.remove_at(1).unwrap();
        assert_eq!(prefs.saved_items(), list.items());
        assert_eq!(prefs.saved_items(), vec![item("Milk", 4)]);
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let (mut list, prefs) = list_with(&[item("Milk", 2)]);
        let seen = record_changes(&mut list);
        prefs.inner.borrow_mut().reject_writes(true);

        assert!(matches!(
            list.add("Bread", 1),
            Err(AppError::Storage(_))
        ));
        assert!(list.update(0, "Milk", 5).is_err());
        assert!(list.remove_at(0).is_err());

        assert_eq!(list.items(), &[item("Milk", 2)]);
        assert_eq!(prefs.saved_items(), list.items());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_listeners_see_each_change() {
        let (mut list, _prefs) = list_with(&[]);
        let seen = record_changes(&mut list);

        let lengths = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&lengths);
        list.subscribe(move |_: ListChange, items: &[ShoppingItem]| {
            sink.borrow_mut().push(items.len())
        });

        list.add("Milk", 2).unwrap();
        list.add("Bread", 1).unwrap();
        list.update(1, "Bread", 2).unwrap();
        list.remove_at(0).unwrap();
        list.load_all();

        assert_eq!(
            *seen.borrow(),
            vec![
                ListChange::Inserted(0),
                ListChange::Inserted(1),
                ListChange::Changed(1),
                ListChange::Removed(0),
                ListChange::Reloaded,
            ]
        );
        assert_eq!(*lengths.borrow(), vec![1, 2, 2, 1, 1]);
    }

    #[test]
    fn test_swipe_cancel_only_redraws() {
        let (mut list, prefs) = list_with(&[item("Milk", 2), item("Bread", 1)]);
        let seen = record_changes(&mut list);

        let pending = list.begin_swipe_delete(1).unwrap();
        list.cancel_delete(pending);

        assert_eq!(list.len(), 2);
        assert_eq!(prefs.saved_items(), list.items());
        assert_eq!(*seen.borrow(), vec![ListChange::Changed(1)]);
    }

    #[test]
    fn test_swipe_confirm_removes_captured_index() {
        let (mut list, _prefs) =
            list_with(&[item("Milk", 2), item("Bread", 1), item("Eggs", 6)]);

        let pending = list.begin_swipe_delete(1).unwrap();
        assert_eq!(pending.index(), 1);

        let removed = list.confirm_delete(pending).unwrap();

        assert_eq!(removed, item("Bread", 1));
        assert_eq!(list.items(), &[item("Milk", 2), item("Eggs", 6)]);
    }

    #[test]
    fn test_swipe_confirm_after_other_delete_is_refused() {
        let (mut list, prefs) =
            list_with(&[item("Milk", 2), item("Bread", 1), item("Eggs", 6)]);

        let pending = list.begin_swipe_delete(1).unwrap();
        list.remove_at(0).unwrap();

        let err = list.confirm_delete(pending).unwrap_err();

        assert!(matches!(err, AppError::StaleDeletion { index: 1 }));
        assert_eq!(list.items(), &[item("Bread", 1), item("Eggs", 6)]);
        assert_eq!(prefs.saved_items(), list.items());
    }

    #[test]
    fn test_swipe_confirm_after_reload_is_refused() {
        let (mut list, _prefs) = list_with(&[item("Milk", 2), item("Bread", 1)]);

        let pending = list.begin_swipe_delete(0).unwrap();
        list.load_all();

        assert!(list.confirm_delete(pending).is_err());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_failed_write_keeps_swipe_valid() {
        let (mut list, prefs) = list_with(&[item("Milk", 2), item("Bread", 1)]);

        let pending = list.begin_swipe_delete(1).unwrap();
        prefs.inner.borrow_mut().reject_writes(true);
        assert!(list.add("Eggs", 6).is_err());
        prefs.inner.borrow_mut().reject_writes(false);

        let removed = list.confirm_delete(pending).unwrap();
        assert_eq!(removed, item("Bread", 1));
    }

    #[test]
    fn test_stale_swipe_cancel_redraws_everything() {
        let (mut list, _prefs) = list_with(&[item("Milk", 2), item("Bread", 1)]);
        let pending = list.begin_swipe_delete(1).unwrap();
        list.remove_at(0).unwrap();

        let seen = record_changes(&mut list);
        list.cancel_delete(pending);

        assert_eq!(*seen.borrow(), vec![ListChange::Reloaded]);
    }

    #[test]
    fn test_swipe_on_missing_row() {
        let (list, _prefs) = list_with(&[item("Milk", 2)]);
        assert!(list.begin_swipe_delete(3).is_err());
    }

    #[test]
    fn test_edit_draft() {
        let (list, _prefs) = list_with(&[item("Milk", 2), item("Bread", 10)]);

        let draft = list.edit_draft(1).unwrap();
        assert_eq!(
            draft,
            EditDraft {
                index: 1,
                name: "Bread".to_string(),
                quantity: "10".to_string(),
            }
        );

        assert!(list.edit_draft(2).is_err());
    }

    #[test]
    fn test_restart_with_file_preferences() {
        let dir = tempfile::tempdir().unwrap();

        {
            let prefs = FilePreferences::open(dir.path(), "shopping_list_prefs").unwrap();
            let mut list = ShoppingList::open(prefs, DEFAULT_ITEMS_KEY);
            list.add("Milk", 2).unwrap();
            list.add("Bread", 1).unwrap();
            list.add("Eggs", 6).unwrap();
            list.remove_at(1).unwrap();
        }

        let prefs = FilePreferences::open(dir.path(), "shopping_list_prefs").unwrap();
        let list = ShoppingList::open(prefs, DEFAULT_ITEMS_KEY);

        assert_eq!(list.items(), &[item("Milk", 2), item("Eggs", 6)]);
    }
}
