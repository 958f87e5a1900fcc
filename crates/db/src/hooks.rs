//! Post-create extension point for user accounts.
//!
//! [`UserLifecycle::create_user`] inserts the account and then runs every
//! registered [`UserCreatedHook`] on the same transaction, so a failing hook
//! rolls the account back with it. Hooks run exactly once per account and
//! never on update.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use crate::models::user::{CreateUser, User};
use crate::repositories::{UserProfileRepo, UserRepo};

/// Reaction to a newly inserted user, run inside the creating transaction.
#[async_trait]
pub trait UserCreatedHook: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn on_user_created(&self, conn: &mut PgConnection, user: &User)
        -> Result<(), sqlx::Error>;
}

/// Inserts the empty `user_profiles` row every account owns.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProvisionProfile;

#[async_trait]
impl UserCreatedHook for ProvisionProfile {
    fn name(&self) -> &'static str {
        "provision_profile"
    }

    async fn on_user_created(
        &self,
        conn: &mut PgConnection,
        user: &User,
    ) -> Result<(), sqlx::Error> {
        let profile = UserProfileRepo::create_for_user(&mut *conn, user.id).await?;
        tracing::debug!(user_id = user.id, profile_id = profile.id, "Provisioned user profile");
        Ok(())
    }
}

/// Ordered registry of [`UserCreatedHook`]s.
#[derive(Clone)]
pub struct UserLifecycle {
    hooks: Vec<Arc<dyn UserCreatedHook>>,
}

impl UserLifecycle {
    /// A registry with no hooks at all.
    pub fn empty() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Append a hook; hooks run in registration order.
    pub fn with_hook(mut self, hook: impl UserCreatedHook + 'static) -> Self {
        self.hooks.push(Arc::new(hook));
        self
    }

    /// Names of the registered hooks, in run order.
    pub fn hook_names(&self) -> Vec<&'static str> {
        self.hooks.iter().map(|h| h.name()).collect()
    }

    /// Insert a user and run every hook in one transaction.
    pub async fn create_user(&self, pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let user = UserRepo::create(&mut *tx, input).await?;

        for hook in &self.hooks {
            if let Err(e) = hook.on_user_created(&mut *tx, &user).await {
                tracing::warn!(
                    user_id = user.id,
                    hook = hook.name(),
                    error = %e,
                    "User-created hook failed, rolling back"
                );
                return Err(e);
            }
        }

        tx.commit().await?;
        tracing::info!(user_id = user.id, username = %user.username, "User created");
        Ok(user)
    }
}

impl Default for UserLifecycle {
    /// The production registry: every account gets a profile.
    fn default() -> Self {
        Self::empty().with_hook(ProvisionProfile)
    }
}

impl std::fmt::Debug for UserLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserLifecycle")
            .field("hooks", &self.hook_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_provisions_profiles() {
        assert_eq!(UserLifecycle::default().hook_names(), vec!["provision_profile"]);
    }

    #[test]
    fn empty_registry_has_no_hooks() {
        assert!(UserLifecycle::empty().hook_names().is_empty());
    }
}
