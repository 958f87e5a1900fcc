//! Employee entity model and DTOs.

use agency_core::identity::display_name;
use agency_core::types::{Date, DbId, Timestamp};
use agency_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An `employees` row joined with its user account and profile.
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeRow {
    pub id: DbId,
    pub user_id: DbId,
    pub position: String,
    pub start_work_date: Date,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: DbId,
    pub user: DbId,
    pub name: String,
    pub email: String,
    pub position: String,
    pub start_work_date: Date,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: row.id,
            user: row.user_id,
            name: display_name(row.full_name.as_deref(), &row.username),
            email: row.email,
            position: row.position,
            start_work_date: row.start_work_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for creating (or fully replacing) an employee.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEmployee {
    pub user: DbId,
    #[validate(length(max = 50), custom(function = "not_blank"))]
    pub position: String,
    pub start_work_date: Date,
}

pub type UpdateEmployee = CreateEmployee;
