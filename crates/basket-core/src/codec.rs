//! # Persistence Codec
//!
//! Converts the whole list to and from the text stored in the preference
//! slot.
//!
//! ## Wire Shape
//! ```text
//! [
//!   { "name": "Milk",  "quantity": 2 },
//!   { "name": "Bread", "quantity": 1 }
//! ]
//! ```
//! A bare JSON array. No envelope, no version field, no checksum. The whole
//! list is rewritten on every mutation, so there is nothing to migrate
//! beyond "replace everything".

use crate::error::{CoreError, CoreResult};
use crate::types::ShoppingItem;

/// Encodes the list as a compact JSON array.
///
/// Output is deterministic: same items in the same order always produce
/// the same text.
pub fn encode(items: &[ShoppingItem]) -> CoreResult<String> {
    serde_json::to_string(items).map_err(|e| CoreError::Encoding(e.to_string()))
}

/// Decodes text produced by [`encode`].
///
/// Blank text means "nothing saved yet" and decodes to an empty list.
///
/// ## Errors
/// `MalformedData` when the text is not an array of `{name, quantity}`
/// objects (missing field, wrong type, non-integer quantity, etc.).
pub fn decode(text: &str) -> CoreResult<Vec<ShoppingItem>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(text).map_err(|e| CoreError::MalformedData(e.to_string()))
}
