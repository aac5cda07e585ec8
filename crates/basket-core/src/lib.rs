//! # basket-core: Pure Shopping-List Logic
//!
//! This crate is the **heart** of Basket. It holds the item type, the
//! positional item store, input validation, and the JSON codec used to
//! persist the list. Nothing here touches the file system.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Basket Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI Layer (external)                          │   │
//! │  │    Add dialog ──► Edit dialog ──► Swipe ──► Confirm / Cancel    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  basket-app (ShoppingList)                      │   │
//! │  │    validate ──► mutate ──► save ──► notify listeners            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ basket-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   store   │  │   codec   │  │ validation│  │   │
//! │  │   │ Shopping  │  │ ItemStore │  │  encode   │  │   rules   │  │   │
//! │  │   │   Item    │  │           │  │  decode   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              basket-prefs (Preference Slot)                     │   │
//! │  │        one key ("shopping_items") → encoded list                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `ShoppingItem`
//! - [`store`] - Ordered, index-addressed item collection
//! - [`codec`] - JSON encoding of the whole list
//! - [`validation`] - Boundary checks on raw user input
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use basket_core::{codec, ItemStore, ShoppingItem};
//!
//! let mut store = ItemStore::new();
//! store.add(ShoppingItem::new("Milk", 2).unwrap());
//!
//! let blob = codec::encode(store.snapshot()).unwrap();
//! assert_eq!(blob, r#"[{"name":"Milk","quantity":2}]"#);
//! assert_eq!(codec::decode(&blob).unwrap(), store.snapshot());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod codec;
pub mod error;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use store::ItemStore;
pub use types::ShoppingItem;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Name of the preference set that holds the list.
pub const DEFAULT_PREFS_NAME: &str = "shopping_list_prefs";

/// Key under which the encoded list is stored.
pub const DEFAULT_ITEMS_KEY: &str = "shopping_items";

/// Maximum quantity of a single item.
///
/// ## Why i32::MAX?
/// Quantities are persisted as plain JSON integers and read back by
/// 32-bit clients, so anything above this would not survive a round trip
/// on every reader of the preference file.
pub const MAX_ITEM_QUANTITY: i64 = i32::MAX as i64;
