//! Repository for the `clients` table.

use agency_core::types::DbId;
use sqlx::PgPool;

use crate::models::client::{Client, ClientRow, CreateClient, UpdateClient};

/// Columns of the client view: the client row plus the account fields the
/// derived `name` / `email` are built from.
const VIEW_COLUMNS: &str = "c.id, c.user_id, c.sphere, c.company_name, c.created_at, \
                            c.updated_at, u.username, u.email, p.full_name";

/// `SELECT` of the client view over `source`, which is aliased `c`.
///
/// `source` is either the `clients` table or the name of a data-modifying
/// CTE, so inserts and updates return the joined view in one round trip.
fn select_from(source: &str) -> String {
    format!(
        "SELECT {VIEW_COLUMNS}
         FROM {source} c
         JOIN users u ON u.id = c.user_id
         LEFT JOIN user_profiles p ON p.user_id = c.user_id"
    )
}

/// Provides CRUD operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client, returning the created view.
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        let query = format!(
            "WITH written AS (
                INSERT INTO clients (user_id, sphere, company_name)
                VALUES ($1, $2, $3)
                RETURNING *
             )
             {}",
            select_from("written")
        );
        let row = sqlx::query_as::<_, ClientRow>(&query)
            .bind(input.user)
            .bind(&input.sphere)
            .bind(&input.company_name)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("{} WHERE c.id = $1", select_from("clients"));
        let row = sqlx::query_as::<_, ClientRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Client::from))
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("{} ORDER BY c.id", select_from("clients"));
        let rows = sqlx::query_as::<_, ClientRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Client::from).collect())
    }

    /// Replace all writable fields of a client.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClient,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!(
            "WITH written AS (
                UPDATE clients SET
                    user_id = $2,
                    sphere = $3,
                    company_name = $4
                WHERE id = $1
                RETURNING *
             )
             {}",
            select_from("written")
        );
        let row = sqlx::query_as::<_, ClientRow>(&query)
            .bind(id)
            .bind(input.user)
            .bind(&input.sphere)
            .bind(&input.company_name)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Client::from))
    }

    /// Delete a client by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
