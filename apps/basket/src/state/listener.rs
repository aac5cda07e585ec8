//! Change notifications for the UI layer.
//!
//! The controller never renders anything. After each successful mutation
//! or load it tells every registered listener what changed and hands over
//! the full, current list.

use basket_core::ShoppingItem;
use serde::Serialize;

/// What happened to the list.
///
/// Positions refer to the list *after* the change, except `Removed`,
/// which names the position the item used to occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "camelCase")]
pub enum ListChange {
    /// A new item now sits at this position (always the last one).
    Inserted(usize),

    /// The row at this position must be redrawn.
    Changed(usize),

    /// The item at this position is gone; later rows moved up by one.
    Removed(usize),

    /// The whole list was replaced from storage.
    Reloaded,
}

/// Receives list changes.
///
/// Any `Fn(ListChange, &[ShoppingItem])` closure is a listener.
pub trait ListListener {
    fn on_change(&self, change: ListChange, items: &[ShoppingItem]);
}

impl<F> ListListener for F
where
    F: Fn(ListChange, &[ShoppingItem]),
{
    fn on_change(&self, change: ListChange, items: &[ShoppingItem]) {
        self(change, items)
    }
}
