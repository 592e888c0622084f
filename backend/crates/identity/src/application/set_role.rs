//! Set Role Use Case
//!
//! Admin-only role changes.

use kernel::id::UserId;
use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{IdentityError, IdentityResult};

pub struct SetRoleUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> SetRoleUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Set `user_id`'s role to the named role
    pub async fn execute(&self, user_id: &UserId, role_code: &str) -> IdentityResult<UserRole> {
        let role = UserRole::parse(role_code)?;

        let updated = self.repo.set_role(user_id, role).await?;
        if !updated {
            return Err(IdentityError::UserNotFound);
        }

        tracing::info!(user_id = %user_id, role = %role, "User role changed");

        Ok(role)
    }
}
