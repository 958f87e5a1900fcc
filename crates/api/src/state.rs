use std::sync::Arc;

use agency_db::hooks::UserLifecycle;
use tera::Tera;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: agency_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Hooks run inside the user-create transaction.
    pub lifecycle: Arc<UserLifecycle>,
    /// Compiled templates for the HTML list pages.
    pub templates: Arc<Tera>,
}
