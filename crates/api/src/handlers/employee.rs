//! Handlers for the `/employees` resource.

use agency_core::error::CoreError;
use agency_core::types::DbId;
use agency_db::models::employee::{CreateEmployee, Employee, UpdateEmployee};
use agency_db::repositories::EmployeeRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{Path, ValidatedJson};
use crate::state::AppState;

/// POST /api/employees
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateEmployee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let employee = EmployeeRepo::create(&state.pool, &input).await?;
    tracing::info!(employee_id = employee.id, user_id = employee.user, "Employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/employees
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = EmployeeRepo::list(&state.pool).await?;
    Ok(Json(employees))
}

/// GET /api/employees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Employee>> {
    let employee = EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Employee", id)))?;
    Ok(Json(employee))
}

/// PUT /api/employees/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateEmployee>,
) -> AppResult<Json<Employee>> {
    let employee = EmployeeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Employee", id)))?;
    Ok(Json(employee))
}

/// DELETE /api/employees/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if EmployeeRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Employee", id)))
    }
}
