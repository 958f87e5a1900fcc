//! Route definitions for the `/favours` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::favour;
use crate::state::AppState;

/// Routes mounted at `/favours`.
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
        .route("/", get(favour::list).post(favour::create))
        .route(
            "/{id}",
            get(favour::get_by_id)
                .put(favour::update)
                .delete(favour::delete),
        )
}
