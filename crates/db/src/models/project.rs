//! Project entity model and DTOs.

use agency_core::identity::display_name;
use agency_core::types::{Date, DbId, Timestamp};
use agency_core::validation::{money_amount, not_blank};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::client::Client;

/// A `projects` row with the client-user's account, profile and client
/// record left-joined in. The `client_*` columns are `None` when the client
/// user has no `clients` row.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: DbId,
    pub name: String,
    pub client_user_id: DbId,
    pub start_date: Date,
    pub deadline: Date,
    pub budget: Decimal,
    pub status: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub client_id: Option<DbId>,
    pub client_sphere: Option<String>,
    pub client_company_name: Option<String>,
    pub client_created_at: Option<Timestamp>,
    pub client_updated_at: Option<Timestamp>,
}

/// Project wire shape. `client` embeds the full client representation and
/// is read-only; `client_user` is the writable reference.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub client: Option<Client>,
    pub client_user: DbId,
    pub start_date: Date,
    pub deadline: Date,
    #[serde(with = "rust_decimal::serde::float")]
    pub budget: Decimal,
    pub status: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        let client = match (
            row.client_id,
            row.client_sphere,
            row.client_company_name,
            row.client_created_at,
            row.client_updated_at,
        ) {
            (Some(id), Some(sphere), Some(company_name), Some(created_at), Some(updated_at)) => {
                Some(Client {
                    id,
                    user: row.client_user_id,
                    name: display_name(row.full_name.as_deref(), &row.username),
                    email: row.email,
                    sphere,
                    company_name,
                    created_at,
                    updated_at,
                })
            }
            _ => None,
        };

        Self {
            id: row.id,
            name: row.name,
            client,
            client_user: row.client_user_id,
            start_date: row.start_date,
            deadline: row.deadline,
            budget: row.budget,
            status: row.status,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for creating (or fully replacing) a project.
///
/// `status` is free text. On create it defaults to
/// [`DEFAULT_PROJECT_STATUS`](agency_core::catalog::DEFAULT_PROJECT_STATUS);
/// on update an absent status or description keeps the current value.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(max = 200), custom(function = "not_blank"))]
    pub name: String,
    pub client_user: DbId,
    pub deadline: Date,
    #[validate(custom(function = "money_amount"))]
    pub budget: Decimal,
    #[validate(length(min = 1, max = 50))]
    pub status: Option<String>,
    pub description: Option<String>,
}

pub type UpdateProject = CreateProject;
