//! Data Transfer Objects

use chrono::{DateTime, Utc};
use contest::models::{ParticipantRoster, WinnerResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::payment::{Payment, RecordOutcome};

#[derive(Debug, Deserialize)]
pub struct CreateIntentRequest {
    pub price: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentResponse {
    pub client_secret: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentRequest {
    pub contest_id: Uuid,
    pub contest_name: String,
    pub participant_email: String,
    pub creator_email: String,
    pub amount: f64,
}

/// Recording succeeds either way; `status` distinguishes a fresh record
/// from an idempotent repeat
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentResponse {
    pub success: bool,
    pub status: String,
}

impl From<RecordOutcome> for RecordPaymentResponse {
    fn from(outcome: RecordOutcome) -> Self {
        Self {
            success: true,
            status: outcome.code().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub participant: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatorQuery {
    pub creator: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnerQuery {
    pub winner_email: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: Uuid,
    pub contest_id: Uuid,
    pub contest_name: String,
    pub participant_email: String,
    pub amount: f64,
    pub paid_at: DateTime<Utc>,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.payment_id.into_uuid(),
            contest_id: payment.contest_id.into_uuid(),
            contest_name: payment.contest_name,
            participant_email: payment.participant_email,
            amount: payment.amount,
            paid_at: payment.paid_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterResponse {
    pub contest_id: Uuid,
    pub contest_name: String,
    pub creator_email: String,
    pub participants: Vec<String>,
    pub winner: Option<WinnerResponse>,
    pub updated_at: DateTime<Utc>,
}

impl From<ParticipantRoster> for RosterResponse {
    fn from(roster: ParticipantRoster) -> Self {
        Self {
            contest_id: roster.contest_id.into_uuid(),
            contest_name: roster.contest_name,
            creator_email: roster.creator_email,
            participants: roster.participants,
            winner: roster.winner.map(WinnerResponse::from),
            updated_at: roster.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_response_status() {
        let recorded = RecordPaymentResponse::from(RecordOutcome::Recorded);
        assert_eq!(recorded.status, "recorded");

        let duplicate = RecordPaymentResponse::from(RecordOutcome::Duplicate);
        assert!(duplicate.success);
        assert_eq!(duplicate.status, "duplicate");
    }
}
