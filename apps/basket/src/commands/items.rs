//! # Item Commands
//!
//! What the UI calls when the user acts on the list. Each command takes
//! the raw dialog text, so parsing and validation live here rather than in
//! the view code.
//!
//! ## Dialog Flows
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Dialog Flows                                         │
//! │                                                                         │
//! │  FAB tap ──► Add dialog ──► OK ──► add_item(name, qty) ──► "Item added" │
//! │                                                                         │
//! │  Long press ──► get_edit_draft(i) ──► Edit dialog (pre-filled)          │
//! │                     ──► OK ──► edit_item(i, name, qty) ──► "Item updated"│
//! │                                                                         │
//! │  Delete button ──► delete_item(i) ──► "Milk removed"                    │
//! │                                                                         │
//! │  Swipe ──► swipe_delete(i) ──► Confirm? ─┬─ Yes ─► confirm_delete       │
//! │                                          └─ No ──► cancel_delete        │
//! │                                                    (row redrawn)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! On a validation error the dialog keeps its contents and shows
//! `ApiError::message`.

use basket_core::ShoppingItem;
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{EditDraft, PendingDeletion, ShoppingList};

/// Result of a command: the list to render plus an optional short message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResponse {
    pub items: Vec<ShoppingItem>,
    pub notice: Option<String>,
}

impl CommandResponse {
    fn from_list(list: &ShoppingList, notice: Option<String>) -> Self {
        CommandResponse {
            items: list.items().to_vec(),
            notice,
        }
    }
}

/// Gets the current list.
pub fn get_items(list: &ShoppingList) -> CommandResponse {
    debug!("get_items command");
    CommandResponse::from_list(list, None)
}

/// Adds an item from the add dialog.
pub fn add_item(
    list: &mut ShoppingList,
    name: &str,
    quantity: &str,
) -> Result<CommandResponse, ApiError> {
    debug!(name, quantity, "add_item command");

    let item = ShoppingItem::from_input(name, quantity)?;
    list.add_item(item)?;

    Ok(CommandResponse::from_list(list, Some("Item added".to_string())))
}

/// Gets the values to pre-fill the edit dialog with.
pub fn get_edit_draft(list: &ShoppingList, index: usize) -> Result<EditDraft, ApiError> {
    debug!(index, "get_edit_draft command");
    Ok(list.edit_draft(index)?)
}

/// Saves the edit dialog over the item at `index`.
pub fn edit_item(
    list: &mut ShoppingList,
    index: usize,
    name: &str,
    quantity: &str,
) -> Result<CommandResponse, ApiError> {
    debug!(index, name, quantity, "edit_item command");

    let item = ShoppingItem::from_input(name, quantity)?;
    list.update_item(index, item)?;

    Ok(CommandResponse::from_list(list, Some("Item updated".to_string())))
}

/// Deletes the item at `index` without confirmation (row delete button).
pub fn delete_item(list: &mut ShoppingList, index: usize) -> Result<CommandResponse, ApiError> {
    debug!(index, "delete_item command");

    let removed = list.remove_at(index)?;
    Ok(CommandResponse::from_list(list, Some(removed_notice(&removed))))
}

/// Starts a swipe-to-delete; the UI shows the confirmation prompt.
pub fn swipe_delete(list: &ShoppingList, index: usize) -> Result<PendingDeletion, ApiError> {
    debug!(index, "swipe_delete command");
    Ok(list.begin_swipe_delete(index)?)
}

/// Confirms a pending swipe-to-delete.
pub fn confirm_delete(
    list: &mut ShoppingList,
    pending: PendingDeletion,
) -> Result<CommandResponse, ApiError> {
    debug!(index = pending.index(), "confirm_delete command");

    let removed = list.confirm_delete(pending)?;
    Ok(CommandResponse::from_list(list, Some(removed_notice(&removed))))
}

/// Cancels a pending swipe-to-delete.
pub fn cancel_delete(list: &mut ShoppingList, pending: PendingDeletion) -> CommandResponse {
    debug!(index = pending.index(), "cancel_delete command");

    list.cancel_delete(pending);
    CommandResponse::from_list(list, None)
}

fn removed_notice(item: &ShoppingItem) -> String {
    format!("{} removed", item.name)
}

#[cfg(test)]
mod tests {
    use basket_core::DEFAULT_ITEMS_KEY;
    use basket_prefs::MemoryPreferences;

    use super::*;
    use crate::error::ErrorCode;

    fn empty_list() -> ShoppingList {
        ShoppingList::open(MemoryPreferences::new(), DEFAULT_ITEMS_KEY)
    }

    #[test]
    fn test_add_item_trims_input() {
        let mut list = empty_list();

        let response = add_item(&mut list, "  Milk ", " 2").unwrap();

        assert_eq!(response.items, vec![ShoppingItem::new("Milk", 2).unwrap()]);
        assert_eq!(response.notice.as_deref(), Some("Item added"));
    }

    #[test]
    fn test_add_item_rejections() {
        let mut list = empty_list();

        let cases = [
            ("", "3", "Fill in all fields"),
            ("Milk", "", "Fill in all fields"),
            ("Milk", "two", "Enter a valid quantity"),
            ("Milk", "0", "Quantity must be greater than 0"),
            ("Milk", "-1", "Quantity must be greater than 0"),
        ];

        for (name, quantity, message) in cases {
            let err = add_item(&mut list, name, quantity).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError);
            assert_eq!(err.message, message);
        }
        assert!(list.is_empty());
    }

    #[test]
    fn test_edit_flow() {
        let mut list = empty_list();
        add_item(&mut list, "Milk", "2").unwrap();
        add_item(&mut list, "Bread", "1").unwrap();

        let draft = get_edit_draft(&list, 1).unwrap();
        assert_eq!(draft.name, "Bread");
        assert_eq!(draft.quantity, "1");

        let response = edit_item(&mut list, 1, &draft.name, "3").unwrap();
        assert_eq!(response.notice.as_deref(), Some("Item updated"));
        assert_eq!(response.items[1], ShoppingItem::new("Bread", 3).unwrap());
        assert_eq!(response.items.len(), 2);
    }

    #[test]
    fn test_edit_stale_index() {
        let mut list = empty_list();
        add_item(&mut list, "Milk", "2").unwrap();

        let err = edit_item(&mut list, 4, "Milk", "1").unwrap_err();
        assert_eq!(err.code, ErrorCode::IndexOutOfRange);
    }

    #[test]
    fn test_delete_item_names_removed() {
        let mut list = empty_list();
        add_item(&mut list, "Milk", "2").unwrap();
        add_item(&mut list, "Eggs", "6").unwrap();

        let response = delete_item(&mut list, 0).unwrap();

        assert_eq!(response.notice.as_deref(), Some("Milk removed"));
        assert_eq!(response.items, vec![ShoppingItem::new("Eggs", 6).unwrap()]);
    }

    #[test]
    fn test_swipe_flows() {
        let mut list = empty_list();
        add_item(&mut list, "Milk", "2").unwrap();
        add_item(&mut list, "Eggs", "6").unwrap();

        let pending = swipe_delete(&list, 1).unwrap();
        let response = cancel_delete(&mut list, pending);
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.notice, None);

        let pending = swipe_delete(&list, 1).unwrap();
        let response = confirm_delete(&mut list, pending).unwrap();
        assert_eq!(response.notice.as_deref(), Some("Eggs removed"));
        assert_eq!(get_items(&list).items.len(), 1);
    }

    #[test]
    fn test_swipe_after_other_delete_is_refused() {
        let mut list = empty_list();
        add_item(&mut list, "Milk", "2").unwrap();
        add_item(&mut list, "Bread", "1").unwrap();
        add_item(&mut list, "Eggs", "6").unwrap();

        let pending = swipe_delete(&list, 1).unwrap();
        delete_item(&mut list, 0).unwrap();

        let err = confirm_delete(&mut list, pending).unwrap_err();
        assert_eq!(err.code, ErrorCode::IndexOutOfRange);
        assert_eq!(
            get_items(&list).items,
            vec![
                ShoppingItem::new("Bread", 1).unwrap(),
                ShoppingItem::new("Eggs", 6).unwrap(),
            ]
        );
    }
}
