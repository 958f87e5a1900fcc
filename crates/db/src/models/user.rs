//! User account model and DTOs.

use agency_core::types::{Date, DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// DTO for inserting a user. The password is already hashed.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Row for the account listing with the profile left-joined in.
#[derive(Debug, Clone, FromRow)]
pub struct UserWithProfileRow {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub profile_id: Option<DbId>,
    pub full_name: Option<String>,
    pub birthday: Option<Date>,
}

/// Account with its embedded profile (`null` if the profile is missing).
#[derive(Debug, Clone, Serialize)]
pub struct UserWithProfile {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub userprofile: Option<EmbeddedProfile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbeddedProfile {
    pub id: DbId,
    pub full_name: String,
    pub birthday: Option<Date>,
}

impl From<UserWithProfileRow> for UserWithProfile {
    fn from(row: UserWithProfileRow) -> Self {
        let userprofile = row.profile_id.map(|id| EmbeddedProfile {
            id,
            full_name: row.full_name.unwrap_or_default(),
            birthday: row.birthday,
        });
        Self {
            id: row.id,
            username: row.username,
            email: row.email,
            userprofile,
        }
    }
}
