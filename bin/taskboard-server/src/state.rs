//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use crate::config::Config;
use crate::store::MemoryStore;

/// State shared across all HTTP handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Authoritative task collection.
    pub store: Arc<MemoryStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(MemoryStore::new()),
        }
    }
}
