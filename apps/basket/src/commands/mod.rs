//! # Commands Module
//!
//! Entry points for the UI layer. Each command borrows the
//! [`ShoppingList`](crate::state::ShoppingList) the UI owns and returns
//! either a [`CommandResponse`](items::CommandResponse) or an
//! [`ApiError`](crate::error::ApiError).

pub mod items;

pub use items::CommandResponse;
