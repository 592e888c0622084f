//! Contest Lifecycle Module
//!
//! Clean Architecture structure:
//! - `domain/` - Draft/contest/roster entities, value objects, repository traits
//! - `application/` - Use cases (submit, review, confirm, browse, winner)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Lifecycle
//! A creator submits a draft (`pending`); an admin confirms it, which marks
//! the draft `confirmed` and publishes a copy as a contest; the creator
//! eventually selects a winner, which is terminal. Participation is counted
//! on the published contest; the per-contest roster mirrors the winner.
//!
//! ## Atomicity
//! Confirmation and winner selection are multi-table writes and run as
//! single database transactions; a failed step rolls the whole
//! operation back and is reported distinctly.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{ContestError, ContestResult};
pub use infra::postgres::PgContestRepository;
pub use presentation::router::contest_router;

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::postgres::PgContestRepository as ContestStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
