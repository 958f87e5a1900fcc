//! User profile model and DTOs.
//!
//! Profiles are never created through the API; the
//! [`ProvisionProfile`](crate::hooks::ProvisionProfile) hook inserts one per
//! new account.

use agency_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `user_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    #[serde(rename = "user")]
    pub user_id: DbId,
    pub full_name: String,
    pub birthday: Option<Date>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for `PUT /user-profiles/{id}`.
///
/// `birthday` is replaced (absent clears it); `full_name` keeps its current
/// value when absent.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserProfile {
    #[validate(length(max = 200))]
    pub full_name: Option<String>,
    pub birthday: Option<Date>,
}
