//! Repository for the `users` table.

use agency_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::user::{CreateUser, User, UserWithProfile, UserWithProfileRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, password_hash, created_at, updated_at";

/// Provides CRUD operations for users.
///
/// Creating a user through the API goes through
/// [`UserLifecycle::create_user`](crate::hooks::UserLifecycle::create_user)
/// so the post-create hooks run; [`UserRepo::create`] is the bare insert.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &CreateUser,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(executor)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all users in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// List all users with their profile embedded, in insertion order.
    pub async fn list_with_profiles(pool: &PgPool) -> Result<Vec<UserWithProfile>, sqlx::Error> {
        let rows = sqlx::query_as::<_, UserWithProfileRow>(
            "SELECT u.id, u.username, u.email,
                    p.id AS profile_id, p.full_name, p.birthday
             FROM users u
             LEFT JOIN user_profiles p ON p.user_id = u.id
             ORDER BY u.id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(UserWithProfile::from).collect())
    }

    /// Permanently delete a user. Cascades to the profile, client and
    /// employee rows and to the user's projects; assignments staffed by the
    /// user lose their employee reference.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
