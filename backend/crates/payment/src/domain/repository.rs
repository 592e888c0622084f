//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use contest::models::ParticipantRoster;

use crate::domain::entity::payment::{Payment, RecordOutcome};
use crate::error::PaymentResult;

/// Payment repository trait
#[trait_variant::make(PaymentRepository: Send)]
pub trait LocalPaymentRepository {
    /// Record a payment and fold the participant into the contest's
    /// roster, as one atomic operation. A pre-existing (contest,
    /// participant) payment yields `Duplicate` and writes nothing.
    async fn record(&self, payment: &Payment, creator_email: &str)
    -> PaymentResult<RecordOutcome>;

    /// All payments made by one participant, newest first
    async fn list_by_participant(&self, participant_email: &str) -> PaymentResult<Vec<Payment>>;

    /// All rosters for contests owned by one creator
    async fn rosters_by_creator(&self, creator_email: &str)
    -> PaymentResult<Vec<ParticipantRoster>>;

    /// All rosters whose selected winner matches
    async fn rosters_by_winner(&self, winner_email: &str) -> PaymentResult<Vec<ParticipantRoster>>;
}
