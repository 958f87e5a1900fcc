use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// HTML list pages, mounted at the root.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/clients", get(pages::clients_page))
        .route("/projects", get(pages::projects_page))
}
