//! Handlers for the `/project-services` resource.
//!
//! Responses flatten the project, favour and employee names next to their ids.

use agency_core::error::CoreError;
use agency_core::types::DbId;
use agency_db::models::project_service::{CreateProjectService, ProjectService, UpdateProjectService};
use agency_db::repositories::ProjectServiceRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{Path, ValidatedJson};
use crate::state::AppState;

/// POST /api/project-services
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProjectService>,
) -> AppResult<(StatusCode, Json<ProjectService>)> {
    let service = ProjectServiceRepo::create(&state.pool, &input).await?;
    tracing::info!(
        service_id = service.id,
        project_id = service.project,
        favour_id = service.favour,
        "Project service created"
    );
    Ok((StatusCode::CREATED, Json(service)))
}

/// GET /api/project-services
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectService>>> {
    let services = ProjectServiceRepo::list(&state.pool).await?;
    Ok(Json(services))
}

/// GET /api/project-services/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectService>> {
    let service = ProjectServiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("ProjectService", id)))?;
    Ok(Json(service))
}

/// PUT /api/project-services/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateProjectService>,
) -> AppResult<Json<ProjectService>> {
    let service = ProjectServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("ProjectService", id)))?;
    Ok(Json(service))
}

/// DELETE /api/project-services/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ProjectServiceRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("ProjectService", id)))
    }
}
