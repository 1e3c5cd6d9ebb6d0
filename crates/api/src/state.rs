use std::sync::Arc;
use std::time::Instant;

use poetry_db::repositories::PoemStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the store wraps a reference-counted pool.
#[derive(Clone)]
pub struct AppState {
    /// Poem persistence, built around the injected pool.
    pub poems: PoemStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Process start, reported as uptime by `/health`.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(pool: poetry_db::DbPool, config: ServerConfig) -> Self {
        Self {
            poems: PoemStore::new(pool),
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }
}
