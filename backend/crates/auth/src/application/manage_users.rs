//! Manage Users Use Case
//!
//! Admin panel operations over user accounts: listing and role updates.
//! Role gating happens at the route guard; these operations assume an
//! already-authorized caller.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_id::UserId, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

/// Manage users use case
pub struct ManageUsersUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> ManageUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// List every registered user
    pub async fn list(&self) -> AuthResult<Vec<User>> {
        self.repo.list_all().await
    }

    /// Change a user's role
    pub async fn update_role(&self, user_id: &UserId, role_code: &str) -> AuthResult<()> {
        let role = UserRole::from_code(role_code)
            .ok_or_else(|| AuthError::InvalidRole(role_code.to_string()))?;

        let mut user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        user.set_role(role);
        self.repo.update(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            role = %role,
            "User role updated"
        );

        Ok(())
    }
}
