//! Domain Layer
//!
//! Contains the user entity, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::user::{User, UserProfile};
pub use repository::UserRepository;
pub use value_object::{email::Email, user_role::UserRole};
