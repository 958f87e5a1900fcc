//! Client entity model and DTOs.

use agency_core::identity::display_name;
use agency_core::types::{DbId, Timestamp};
use agency_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A `clients` row joined with its user account and profile.
#[derive(Debug, Clone, FromRow)]
pub struct ClientRow {
    pub id: DbId,
    pub user_id: DbId,
    pub sphere: String,
    pub company_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
}

/// Client wire shape. `name` and `email` are derived from the linked
/// account and are read-only.
#[derive(Debug, Clone, Serialize)]
pub struct Client {
    pub id: DbId,
    pub user: DbId,
    pub name: String,
    pub email: String,
    pub sphere: String,
    pub company_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ClientRow> for Client {
    fn from(row: ClientRow) -> Self {
        Self {
            id: row.id,
            user: row.user_id,
            name: display_name(row.full_name.as_deref(), &row.username),
            email: row.email,
            sphere: row.sphere,
            company_name: row.company_name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for creating (or fully replacing) a client.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClient {
    pub user: DbId,
    #[validate(length(max = 100), custom(function = "not_blank"))]
    pub sphere: String,
    #[validate(length(max = 200), custom(function = "not_blank"))]
    pub company_name: String,
}

/// Full-replace update takes the same writable fields as create.
pub type UpdateClient = CreateClient;
