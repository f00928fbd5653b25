//! Shared application state for the runmetrics server.
//!
//! Owns the config and the injected metric store. Cloned into every handler.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::{MemStorage, Storage};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    storage: Arc<dyn Storage>,
}

struct AppStateInner {
    cfg: ServerConfig,
}

impl AppState {
    /// Build application state with a fresh, empty in-memory store.
    pub fn new(cfg: ServerConfig) -> Self {
        Self::with_storage(cfg, Arc::new(MemStorage::new()))
    }

    pub fn with_storage(cfg: ServerConfig, storage: Arc<dyn Storage>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg }),
            storage,
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn storage(&self) -> Arc<dyn Storage> {
        Arc::clone(&self.storage)
    }
}
