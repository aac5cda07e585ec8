//! # Basket App Library
//!
//! The controller layer the shopping-list UI is built on. The UI owns one
//! [`ShoppingList`], calls [`commands`] when the user acts, and redraws
//! from the listener notifications.
//!
//! ## Module Organization
//! ```text
//! basket_app/
//! ├── lib.rs          ◄─── You are here (startup & logging)
//! ├── config.rs       ◄─── AppConfig (TOML + env)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── list.rs     ◄─── ShoppingList controller
//! │   └── listener.rs ◄─── ListChange / ListListener
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   └── items.rs    ◄─── add / edit / delete / swipe commands
//! └── error.rs        ◄─── AppError and the UI-facing ApiError
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use std::path::PathBuf;

use basket_prefs::FilePreferences;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::AppConfig;
pub use error::{ApiError, AppError, AppResult, ErrorCode};
pub use state::{ListChange, ListListener, ShoppingList};

/// Starts the app.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → basket.toml → BASKET_* environment                     │
/// │     • falls back to defaults if the file is unreadable                  │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • RUST_LOG wins over the configured filter                          │
/// │                                                                         │
/// │  3. Open Preferences ─────────────────────────────────────────────────► │
/// │     • <data_dir>/<prefs_name>.json                                      │
/// │     • corrupt file: start empty                                         │
/// │                                                                         │
/// │  4. Load the List ────────────────────────────────────────────────────► │
/// │     • missing / malformed value: empty list                             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn start(config_path: Option<PathBuf>) -> AppResult<ShoppingList> {
    let config = AppConfig::load_or_default(config_path);
    init_tracing(&config.logging.filter);

    info!("Starting Basket");
    open_shopping_list(&config)
}

/// Opens the persisted list described by `config`.
///
/// Fails only when the data directory itself is unusable.
pub fn open_shopping_list(config: &AppConfig) -> AppResult<ShoppingList> {
    let data_dir = config.storage.resolve_data_dir()?;
    info!(?data_dir, "Data directory determined");

    let prefs = FilePreferences::open_or_reset(&data_dir, &config.storage.prefs_name)?;
    Ok(ShoppingList::open(prefs, config.storage.items_key.clone()))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=basket_app=trace` - Trace for one crate only
/// - Default: `default_filter` (from config, `info,basket=debug`)
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
