//! Repository for the `user_profiles` table.

use agency_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::user_profile::{UpdateUserProfile, UserProfile};

const COLUMNS: &str = "id, user_id, full_name, birthday, created_at, updated_at";

/// Provides lookup by owner and update for user profiles.
///
/// There is no public create: profiles are inserted only by the
/// [`ProvisionProfile`](crate::hooks::ProvisionProfile) hook, and removed
/// only by cascade from `users`.
pub struct UserProfileRepo;

impl UserProfileRepo {
    /// Insert the empty profile for a freshly created user.
    pub(crate) async fn create_for_user<'e, E: PgExecutor<'e>>(
        executor: E,
        user_id: DbId,
    ) -> Result<UserProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_profiles (user_id)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_profiles WHERE user_id = $1");
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Replace a profile's fields. An absent `full_name` keeps the current
    /// value; `birthday` is always replaced.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUserProfile,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE user_profiles SET
                full_name = COALESCE($2, full_name),
                birthday = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(input.birthday)
            .fetch_optional(pool)
            .await
    }
}
