//! Participant Roster Entity

use chrono::{DateTime, Utc};
use kernel::id::ContestId;

use crate::domain::entity::contest::Winner;

/// Per-contest roster of paying participants.
///
/// Created lazily on the first recorded payment for a contest, grown
/// with set semantics on every later payment, and never deleted by
/// normal flow. Winner selection mirrors the winner fields here.
#[derive(Debug, Clone)]
pub struct ParticipantRoster {
    pub contest_id: ContestId,
    pub contest_name: String,
    pub creator_email: String,
    /// Unique participant emails
    pub participants: Vec<String>,
    pub winner: Option<Winner>,
    pub updated_at: DateTime<Utc>,
}

impl ParticipantRoster {
    /// Roster for a first payment
    pub fn first(
        contest_id: ContestId,
        contest_name: String,
        creator_email: String,
        participant_email: String,
    ) -> Self {
        Self {
            contest_id,
            contest_name,
            creator_email,
            participants: vec![participant_email],
            winner: None,
            updated_at: Utc::now(),
        }
    }

    /// Add a participant; adding an existing member is a no-op
    pub fn add_participant(&mut self, email: String) {
        if !self.participants.contains(&email) {
            self.participants.push(email);
            self.updated_at = Utc::now();
        }
    }
}
