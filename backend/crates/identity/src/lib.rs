//! Identity Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, repository traits
//! - `application/` - Use cases, token service, configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, guards, router
//!
//! ## Features
//! - Stateless signed identity tokens (email claim, year-scale expiry)
//!   delivered as an HttpOnly cookie
//! - User upsert keyed on email (role-preserving)
//! - Role management (user / admin / creator), admin-only role changes
//! - Authorization guards: authenticated, admin, creator
//!
//! ## Security Model
//! - Only the verified token's email claim is authoritative; any
//!   caller-supplied email is compared against it, never substituted
//! - Guards short-circuit before any store access on token failure

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::IdentityConfig;
pub use application::token::{Claims, TokenService};
pub use error::{IdentityError, IdentityResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::router::identity_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::postgres::PgUserRepository as UserStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
