//! Project-service (favour assigned to a project) model and DTOs.

use agency_core::identity::display_name;
use agency_core::types::{Date, DbId, Timestamp};
use agency_core::validation::hours_amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A `project_services` row with project, favour and employee names joined in.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectServiceRow {
    pub id: DbId,
    pub project_id: DbId,
    pub favour_id: DbId,
    pub employee_user_id: Option<DbId>,
    pub status: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub hours_spent: Decimal,
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub project_name: String,
    pub favour_name: String,
    pub employee_username: Option<String>,
    pub employee_full_name: Option<String>,
}

/// Flattened wire shape: each relation is an id plus a denormalized name.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectService {
    pub id: DbId,
    pub project: DbId,
    pub project_name: String,
    pub favour: DbId,
    pub favour_name: String,
    pub employee: Option<DbId>,
    pub employee_name: Option<String>,
    pub status: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    #[serde(with = "rust_decimal::serde::float")]
    pub hours_spent: Decimal,
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ProjectServiceRow> for ProjectService {
    fn from(row: ProjectServiceRow) -> Self {
        let employee_name = row
            .employee_username
            .as_deref()
            .map(|username| display_name(row.employee_full_name.as_deref(), username));

        Self {
            id: row.id,
            project: row.project_id,
            project_name: row.project_name,
            favour: row.favour_id,
            favour_name: row.favour_name,
            employee: row.employee_user_id,
            employee_name,
            status: row.status,
            start_date: row.start_date,
            end_date: row.end_date,
            hours_spent: row.hours_spent,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for creating (or fully replacing) a project service.
///
/// `employee` is the assigned employee's user id. `start_date` is set by
/// the database on insert and is not writable.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProjectService {
    pub project: DbId,
    pub favour: DbId,
    pub employee: Option<DbId>,
    #[validate(length(min = 1, max = 20))]
    pub status: Option<String>,
    pub end_date: Option<Date>,
    #[validate(custom(function = "hours_amount"))]
    pub hours_spent: Option<Decimal>,
    pub notes: Option<String>,
}

pub type UpdateProjectService = CreateProjectService;
