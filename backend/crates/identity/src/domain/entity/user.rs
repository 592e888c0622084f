//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{email::Email, user_role::UserRole};

/// User entity - one row per unique email
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub email: Email,
    pub display_name: String,
    pub image_url: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with the default role
    pub fn new(profile: UserProfile) -> Self {
        let now = Utc::now();
        Self {
            user_id: UserId::new(),
            email: profile.email,
            display_name: profile.display_name,
            image_url: profile.image_url,
            role: UserRole::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Profile fields supplied by the upsert endpoint. The role is never
/// part of the profile; it survives upserts untouched.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub email: Email,
    pub display_name: String,
    pub image_url: Option<String>,
}
