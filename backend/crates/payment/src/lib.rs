//! Payment Module
//!
//! Clean Architecture structure:
//! - `domain/` - Payment entity, repository and gateway traits
//! - `application/` - Use cases, provider configuration
//! - `infra/` - Database and provider implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Recording Model
//! A payment is recorded at most once per (contest, participant) pair;
//! the second attempt is a `Duplicate` outcome, not an error. Each
//! recorded payment also folds the participant into the contest's
//! roster with set semantics. Both writes run as one transaction, with
//! the uniqueness constraint closing the check-then-insert race.
//!
//! ## Intent Bridge
//! Payment intents are created against the external provider through
//! the `PaymentGateway` trait and return an opaque client secret; no
//! local state is written until the client completes payment and the
//! recording endpoint is called.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::PaymentConfig;
pub use error::{PaymentError, PaymentResult};
pub use infra::postgres::PgPaymentRepository;
pub use infra::stripe::StripeGateway;
pub use presentation::router::payment_router;

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::postgres::PgPaymentRepository as PaymentStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
