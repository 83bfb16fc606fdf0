use std::sync::Arc;

use ripple_dispatch::EventIngester;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: ripple_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Producer side of the event pipeline. Holds the queue sender; when
    /// the last `AppState` clone is dropped the dispatcher drains and exits.
    pub ingester: EventIngester,
}
