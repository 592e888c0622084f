//! Role Check Use Case
//!
//! Answers "does this email hold role X" for the self-check endpoints
//! and for the role guards. An absent user simply lacks every role.

use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_role::UserRole};
use crate::error::IdentityResult;

pub struct RoleCheckUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> RoleCheckUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// The stored role for an email, if the user exists
    pub async fn role_of(&self, email: &Email) -> IdentityResult<Option<UserRole>> {
        Ok(self.repo.find_by_email(email).await?.map(|u| u.role))
    }

    pub async fn is_admin(&self, email: &Email) -> IdentityResult<bool> {
        Ok(self.role_of(email).await?.is_some_and(|r| r.is_admin()))
    }

    pub async fn is_creator(&self, email: &Email) -> IdentityResult<bool> {
        Ok(self.role_of(email).await?.is_some_and(|r| r.is_creator()))
    }
}
