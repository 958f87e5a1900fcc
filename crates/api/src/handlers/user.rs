//! Handlers for the `/users` resource and the `/user-list` listing.
//!
//! Accounts are created, listed and read here; there is no update or delete
//! over HTTP. Creation runs the registered
//! [`UserCreatedHook`](agency_db::hooks::UserCreatedHook)s, so every new
//! account comes back with its profile already in place.

use agency_core::error::CoreError;
use agency_core::types::DbId;
use agency_core::validation::{not_blank, optional_email};
use agency_db::models::user::{CreateUser, UserResponse, UserWithProfile};
use agency_db::repositories::UserRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, password_strength};
use crate::error::{AppError, AppResult};
use crate::extract::{Path, ValidatedJson};
use crate::state::AppState;

/// Request body for creating an account. `password` is write-only.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(max = 150), custom(function = "not_blank"))]
    pub username: String,
    /// Optional; empty when not given.
    #[serde(default)]
    #[validate(custom(function = "optional_email"))]
    pub email: String,
    #[validate(custom(function = "password_strength"))]
    pub password: String,
}

/// POST /api/users
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let password_hash = hash_password(&input.password)
        .map_err(|e| CoreError::Internal(format!("Password hashing failed: {e}")))?;

    let create = CreateUser {
        username: input.username.trim().to_string(),
        email: input.email,
        password_hash,
    };
    let user = state.lifecycle.create_user(&state.pool, &create).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("User", id)))?;
    Ok(Json(UserResponse::from(user)))
}

/// GET /api/user-list
///
/// Every account with its profile embedded as `userprofile`.
pub async fn list_with_profiles(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserWithProfile>>> {
    let users = UserRepo::list_with_profiles(&state.pool).await?;
    Ok(Json(users))
}
