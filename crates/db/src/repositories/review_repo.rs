//! Repository for the `reviews` table.

use agency_core::review::DEFAULT_RATING;
use agency_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{CreateReview, Review, ReviewRow, UpdateReview};

const VIEW_COLUMNS: &str = "r.id, r.project_id, r.rating, r.feedback, r.is_published, \
                            r.created_at, r.updated_at, p.name AS project_name, \
                            cu.username AS client_username, cu.email AS client_email, \
                            cp.full_name AS client_full_name";

/// `SELECT` of the review view over `source` (the table or a CTE), aliased `r`.
///
/// The client is reached through the project's client user; nothing about
/// the client is stored on the review itself.
fn select_from(source: &str) -> String {
    format!(
        "SELECT {VIEW_COLUMNS}
         FROM {source} r
         JOIN projects p ON p.id = r.project_id
         JOIN users cu ON cu.id = p.client_user_id
         LEFT JOIN user_profiles cp ON cp.user_id = p.client_user_id"
    )
}

/// Provides CRUD operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a new review. `created_at` is set by the database.
    pub async fn create(pool: &PgPool, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "WITH written AS (
                INSERT INTO reviews (project_id, rating, feedback, is_published)
                VALUES ($1, $2, $3, $4)
                RETURNING *
             )
             {}",
            select_from("written")
        );
        let row = sqlx::query_as::<_, ReviewRow>(&query)
            .bind(input.project)
            .bind(input.rating.unwrap_or(DEFAULT_RATING))
            .bind(&input.feedback)
            .bind(input.is_published)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("{} WHERE r.id = $1", select_from("reviews"));
        let row = sqlx::query_as::<_, ReviewRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Review::from))
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!("{} ORDER BY r.id", select_from("reviews"));
        let rows = sqlx::query_as::<_, ReviewRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Review::from).collect())
    }

    /// Replace a review's writable fields. An absent rating keeps the current one.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReview,
    ) -> Result<Option<Review>, sqlx::Error> {
        let query = format!(
            "WITH written AS (
                UPDATE reviews SET
                    project_id = $2,
                    rating = COALESCE($3, rating),
                    feedback = $4,
                    is_published = $5
                WHERE id = $1
                RETURNING *
             )
             {}",
            select_from("written")
        );
        let row = sqlx::query_as::<_, ReviewRow>(&query)
            .bind(id)
            .bind(input.project)
            .bind(input.rating)
            .bind(&input.feedback)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Review::from))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
