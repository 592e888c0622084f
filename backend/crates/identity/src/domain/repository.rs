//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::user::{User, UserProfile};
use crate::domain::value_object::email::Email;
use crate::domain::value_object::user_role::UserRole;
use crate::error::IdentityResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert-or-update keyed on email. Profile fields are replaced,
    /// the stored role is preserved. Returns the stored user.
    async fn upsert(&self, profile: &UserProfile) -> IdentityResult<User>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> IdentityResult<Option<User>>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> IdentityResult<Option<User>>;

    /// All users, newest first
    async fn list_all(&self) -> IdentityResult<Vec<User>>;

    /// Set a user's role. Returns false when the user does not exist.
    async fn set_role(&self, user_id: &UserId, role: UserRole) -> IdentityResult<bool>;
}
