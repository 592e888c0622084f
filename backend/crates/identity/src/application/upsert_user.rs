//! Upsert User Use Case
//!
//! Creates or refreshes a user row keyed on email. Roles are never
//! touched here; promotion goes through [`super::set_role`].

use std::sync::Arc;

use crate::domain::entity::user::{User, UserProfile};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::IdentityResult;

/// Raw profile input from the HTTP layer
#[derive(Debug, Clone)]
pub struct UpsertUserInput {
    pub email: String,
    pub display_name: String,
    pub image_url: Option<String>,
}

/// Upsert user use case
pub struct UpsertUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> UpsertUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: UpsertUserInput) -> IdentityResult<User> {
        let profile = UserProfile {
            email: Email::new(input.email)?,
            display_name: input.display_name.trim().to_string(),
            image_url: input.image_url,
        };

        let user = self.repo.upsert(&profile).await?;

        tracing::info!(user_id = %user.user_id, email = %user.email, "User upserted");

        Ok(user)
    }
}
