//! Handlers for the `/reviews` resource.
//!
//! `client_name` / `client_email` are resolved through the reviewed project.

use agency_core::error::CoreError;
use agency_core::types::DbId;
use agency_db::models::review::{CreateReview, Review, UpdateReview};
use agency_db::repositories::ReviewRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{Path, ValidatedJson};
use crate::state::AppState;

/// POST /api/reviews
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateReview>,
) -> AppResult<(StatusCode, Json<Review>)> {
    let review = ReviewRepo::create(&state.pool, &input).await?;
    tracing::info!(review_id = review.id, project_id = review.project, "Review created");
    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /api/reviews
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Review>>> {
    let reviews = ReviewRepo::list(&state.pool).await?;
    Ok(Json(reviews))
}

/// GET /api/reviews/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Review>> {
    let review = ReviewRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Review", id)))?;
    Ok(Json(review))
}

/// PUT /api/reviews/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateReview>,
) -> AppResult<Json<Review>> {
    let review = ReviewRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Review", id)))?;
    Ok(Json(review))
}

/// DELETE /api/reviews/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ReviewRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Review", id)))
    }
}
