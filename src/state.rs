// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::catalog::DocumentCatalog;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub catalog: DocumentCatalog,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            catalog: DocumentCatalog::sample(),
            config,
        }
    }
}
