//! Repository for the `favours` table.

use agency_core::types::DbId;
use sqlx::PgPool;

use crate::models::favour::{CreateFavour, Favour, UpdateFavour};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, category, description, price, created_at, updated_at";

/// Provides CRUD operations for favours.
pub struct FavourRepo;

impl FavourRepo {
    /// Insert a new favour, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFavour) -> Result<Favour, sqlx::Error> {
        let query = format!(
            "INSERT INTO favours (name, category, description, price)
             VALUES ($1, $2, COALESCE($3, ''), $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Favour>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.description)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Favour>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM favours WHERE id = $1");
        sqlx::query_as::<_, Favour>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Favour>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM favours ORDER BY id");
        sqlx::query_as::<_, Favour>(&query).fetch_all(pool).await
    }

    /// Replace a favour's fields. An absent description keeps the current one.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFavour,
    ) -> Result<Option<Favour>, sqlx::Error> {
        let query = format!(
            "UPDATE favours SET
                name = $2,
                category = $3,
                description = COALESCE($4, description),
                price = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Favour>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.description)
            .bind(input.price)
            .fetch_optional(pool)
            .await
    }

    /// Delete a favour. Cascades to every project service offering it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favours WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
