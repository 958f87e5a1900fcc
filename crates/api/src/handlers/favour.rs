//! Handlers for the `/favours` resource.

use agency_core::error::CoreError;
use agency_core::types::DbId;
use agency_db::models::favour::{CreateFavour, Favour, UpdateFavour};
use agency_db::repositories::FavourRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{Path, ValidatedJson};
use crate::state::AppState;

/// POST /api/favours
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateFavour>,
) -> AppResult<(StatusCode, Json<Favour>)> {
    let favour = FavourRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(favour)))
}

/// GET /api/favours
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Favour>>> {
    let favours = FavourRepo::list(&state.pool).await?;
    Ok(Json(favours))
}

/// GET /api/favours/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Favour>> {
    let favour = FavourRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Favour", id)))?;
    Ok(Json(favour))
}

/// PUT /api/favours/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateFavour>,
) -> AppResult<Json<Favour>> {
    let favour = FavourRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Favour", id)))?;
    Ok(Json(favour))
}

/// DELETE /api/favours/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if FavourRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Favour", id)))
    }
}
