//! Roster Query Use Cases
//!
//! Read-side views over the participant rosters built up by payment
//! recording: a creator's participant aggregates and a user's won
//! contests.

use contest::models::ParticipantRoster;
use std::sync::Arc;

use crate::domain::repository::PaymentRepository;
use crate::error::PaymentResult;

pub struct RosterQueriesUseCase<P>
where
    P: PaymentRepository,
{
    payments: Arc<P>,
}

impl<P> RosterQueriesUseCase<P>
where
    P: PaymentRepository,
{
    pub fn new(payments: Arc<P>) -> Self {
        Self { payments }
    }

    /// Rosters for every contest owned by one creator
    pub async fn for_creator(&self, creator_email: &str) -> PaymentResult<Vec<ParticipantRoster>> {
        self.payments.rosters_by_creator(creator_email).await
    }

    /// Rosters whose selected winner matches
    pub async fn won_by(&self, winner_email: &str) -> PaymentResult<Vec<ParticipantRoster>> {
        self.payments.rosters_by_winner(winner_email).await
    }
}
