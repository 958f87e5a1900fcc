//! Handlers for the `/user-profiles` resource (update only).

use agency_core::error::CoreError;
use agency_core::types::DbId;
use agency_db::models::user_profile::{UpdateUserProfile, UserProfile};
use agency_db::repositories::UserProfileRepo;
use axum::extract::State;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{Path, ValidatedJson};
use crate::state::AppState;

/// PUT /api/user-profiles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateUserProfile>,
) -> AppResult<Json<UserProfile>> {
    let profile = UserProfileRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("UserProfile", id)))?;
    tracing::debug!(profile_id = profile.id, user_id = profile.user_id, "User profile updated");
    Ok(Json(profile))
}
