//! # Domain Types
//!
//! The one domain type in Basket: a line on the shopping list.
//!
//! ## Positional Identity
//! Items carry no ID. An item *is* its position in the list, and two items
//! with the same name and quantity are indistinguishable. Positions shift
//! on removal, so a held index is only valid until the next mutation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::validation::{validate_item_input, validate_item_name, validate_quantity, ValidationResult};

// =============================================================================
// Shopping Item
// =============================================================================

/// A single entry on the shopping list.
///
/// ## Persisted Shape
/// ```json
/// { "name": "Milk", "quantity": 2 }
/// ```
///
/// Fields are public so the store and codec can carry whatever was
/// persisted; use [`ShoppingItem::new`] or [`ShoppingItem::from_input`]
/// for anything that came from a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShoppingItem {
    /// Display label, never empty for user-created items.
    pub name: String,

    /// How many to buy, always > 0 for user-created items.
    pub quantity: i64,
}

impl ShoppingItem {
    /// Creates a validated item from typed values.
    ///
    /// The name is trimmed.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::ShoppingItem;
    ///
    /// let item = ShoppingItem::new(" Milk ", 2).unwrap();
    /// assert_eq!(item.name, "Milk");
    ///
    /// assert!(ShoppingItem::new("", 3).is_err());
    /// assert!(ShoppingItem::new("Milk", 0).is_err());
    /// ```
    pub fn new(name: &str, quantity: i64) -> ValidationResult<Self> {
        let name = validate_item_name(name)?;
        validate_quantity(quantity)?;
        Ok(ShoppingItem { name, quantity })
    }

    /// Creates a validated item from raw dialog text.
    ///
    /// See [`validate_item_input`] for the check order.
    pub fn from_input(name: &str, quantity_text: &str) -> ValidationResult<Self> {
        let (name, quantity) = validate_item_input(name, quantity_text)?;
        Ok(ShoppingItem { name, quantity })
    }

    /// Quantity rendered the way the edit dialog pre-fills it.
    pub fn quantity_text(&self) -> String {
        self.quantity.to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
