//! Payment Entity

use chrono::{DateTime, Utc};
use kernel::id::{ContestId, PaymentId};

/// Immutable record of one participant paying into one contest.
/// At most one exists per (contest, participant) pair.
#[derive(Debug, Clone)]
pub struct Payment {
    pub payment_id: PaymentId,
    pub contest_id: ContestId,
    /// Carried for display; the contest UUID is the key
    pub contest_name: String,
    pub participant_email: String,
    /// Amount in major currency units
    pub amount: f64,
    pub paid_at: DateTime<Utc>,
}

impl Payment {
    pub fn new(
        contest_id: ContestId,
        contest_name: String,
        participant_email: String,
        amount: f64,
    ) -> Self {
        Self {
            payment_id: PaymentId::new(),
            contest_id,
            contest_name,
            participant_email,
            amount,
            paid_at: Utc::now(),
        }
    }
}

/// What a recording attempt actually did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Payment inserted, participant folded into the roster
    Recorded,
    /// The pair was already recorded; nothing was written
    Duplicate,
}

impl RecordOutcome {
    pub const fn code(&self) -> &'static str {
        match self {
            RecordOutcome::Recorded => "recorded",
            RecordOutcome::Duplicate => "duplicate",
        }
    }
}
