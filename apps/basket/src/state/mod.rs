//! # State Module
//!
//! Application state owned by the UI's top-level controller.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   UI controller (external)                      │   │
//! │  │   let mut list = basket_app::start(None)?;                      │   │
//! │  │   list.subscribe(render);                                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ owns                                   │
//! │                                ▼                                        │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      ShoppingList                               │   │
//! │  │                                                                 │   │
//! │  │   ItemStore        Box<dyn PreferenceStore>    listeners        │   │
//! │  │   (in memory)      (durable slot)              (re-render)      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  No globals: the list lives exactly as long as the controller does.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod list;
mod listener;

pub use list::{EditDraft, PendingDeletion, ShoppingList};
pub use listener::{ListChange, ListListener};
