//! Runtime lifecycle helpers
//!
//! The store is created empty at process start and lives for as long as the
//! hosting layer keeps a handle to it.

use configs::{AppConfig, LogFormat};
use tracing::info;

use crate::books::store::BookStore;

/// Initialize logging per config and return a fresh, empty store.
/// Safe to call more than once; the first subscriber stays installed.
pub fn bootstrap(cfg: &AppConfig) -> BookStore {
    let filter = cfg.logging.filter.as_deref();
    match cfg.logging.format {
        LogFormat::Compact => common::utils::logging::init_logging_with(filter),
        LogFormat::Json => common::utils::logging::init_logging_json_with(filter),
    }
    info!(service = "bookstore", event = "store_init", "book store initialized");
    BookStore::new()
}
