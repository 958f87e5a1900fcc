//! Review entity model and DTOs.

use agency_core::identity::display_name;
use agency_core::types::{DbId, Timestamp};
use agency_core::validation::{not_blank, rating_in_range};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A `reviews` row with the project and the project's client user joined in.
#[derive(Debug, Clone, FromRow)]
pub struct ReviewRow {
    pub id: DbId,
    pub project_id: DbId,
    pub rating: i16,
    pub feedback: String,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub project_name: String,
    pub client_username: String,
    pub client_email: String,
    pub client_full_name: Option<String>,
}

/// Review wire shape. The client identity is never stored on the review;
/// it is resolved through review -> project -> client user -> profile.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub id: DbId,
    pub project: DbId,
    pub project_name: String,
    pub client_name: String,
    pub client_email: String,
    pub rating: i16,
    pub feedback: String,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Self {
            id: row.id,
            project: row.project_id,
            project_name: row.project_name,
            client_name: display_name(row.client_full_name.as_deref(), &row.client_username),
            client_email: row.client_email,
            rating: row.rating,
            feedback: row.feedback,
            is_published: row.is_published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for creating (or fully replacing) a review.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReview {
    pub project: DbId,
    /// Defaults to [`DEFAULT_RATING`](agency_core::review::DEFAULT_RATING).
    #[validate(custom(function = "rating_in_range"))]
    pub rating: Option<i16>,
    #[validate(custom(function = "not_blank"))]
    pub feedback: String,
    #[serde(default)]
    pub is_published: bool,
}

pub type UpdateReview = CreateReview;
