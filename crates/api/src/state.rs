use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::CharacterService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (used by the health check).
    pub pool: roster_db::DbPool,
    /// Character service over the injected store.
    pub characters: CharacterService,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
