//! Route definitions for user accounts and their profiles.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{user, user_profile};
use crate::state::AppState;

/// Routes mounted at `/users`. No update or delete.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list).post(user::create))
        .route("/{id}", get(user::get_by_id))
}

/// Routes mounted at `/user-profiles`. Any other method answers 405.
///
/// ```text
/// PUT    /{id}    -> update
/// ```
pub fn profile_router() -> Router<AppState> {
    Router::new().route("/{id}", put(user_profile::update))
}
