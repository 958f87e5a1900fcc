pub mod client;
pub mod employee;
pub mod favour;
pub mod health;
pub mod pages;
pub mod project;
pub mod project_service;
pub mod review;
pub mod user;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy (trailing slashes are optional on every path):
///
/// ```text
/// /clients                     list, create
/// /clients/{id}                get, update, delete
///
/// /projects                    list, create
/// /projects/{id}               get, update, delete
///
/// /favours                     list, create
/// /favours/{id}                get, update, delete
///
/// /employees                   list, create
/// /employees/{id}              get, update, delete
///
/// /project-services            list, create
/// /project-services/{id}       get, update, delete
///
/// /reviews                     list, create
/// /reviews/{id}                get, update, delete
///
/// /users                       list, create
/// /users/{id}                  get
///
/// /user-profiles/{id}          update
///
/// /user-list                   accounts with embedded profiles
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/clients", client::router())
        .nest("/projects", project::router())
        .nest("/favours", favour::router())
        .nest("/employees", employee::router())
        .nest("/project-services", project_service::router())
        .nest("/reviews", review::router())
        .nest("/users", user::router())
        .nest("/user-profiles", user::profile_router())
        .route("/user-list", get(handlers::user::list_with_profiles))
}
