//! Route definitions for the `/project-services` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project_service;
use crate::state::AppState;

/// Routes mounted at `/project-services`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project_service::list).post(project_service::create))
        .route(
            "/{id}",
            get(project_service::get_by_id)
                .put(project_service::update)
                .delete(project_service::delete),
        )
}
