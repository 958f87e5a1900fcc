//! Handlers for the `/clients` resource.

use agency_core::error::CoreError;
use agency_core::types::DbId;
use agency_db::models::client::{CreateClient, Client, UpdateClient};
use agency_db::repositories::ClientRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{Path, ValidatedJson};
use crate::state::AppState;

/// POST /api/clients
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateClient>,
) -> AppResult<(StatusCode, Json<Client>)> {
    let client = ClientRepo::create(&state.pool, &input).await?;
    tracing::info!(client_id = client.id, user_id = client.user, "Client created");
    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /api/clients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(clients))
}

/// GET /api/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Client", id)))?;
    Ok(Json(client))
}

/// PUT /api/clients/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateClient>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Client", id)))?;
    Ok(Json(client))
}

/// DELETE /api/clients/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ClientRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Client", id)))
    }
}
