//! Record Payment Use Case
//!
//! Persists one payment per (contest, participant) pair and folds the
//! participant into the contest's roster. The duplicate check and the
//! insert are a single atomic store operation; repeating the call is a
//! `Duplicate` outcome, never an error and never a second record.

use identity::models::Email;
use kernel::id::ContestId;
use std::sync::Arc;

use crate::domain::entity::payment::{Payment, RecordOutcome};
use crate::domain::repository::PaymentRepository;
use crate::error::PaymentResult;

#[derive(Debug, Clone)]
pub struct RecordPaymentInput {
    pub contest_id: ContestId,
    pub contest_name: String,
    pub participant_email: String,
    pub creator_email: String,
    pub amount: f64,
}

pub struct RecordPaymentUseCase<P>
where
    P: PaymentRepository,
{
    payments: Arc<P>,
}

impl<P> RecordPaymentUseCase<P>
where
    P: PaymentRepository,
{
    pub fn new(payments: Arc<P>) -> Self {
        Self { payments }
    }

    pub async fn execute(&self, input: RecordPaymentInput) -> PaymentResult<RecordOutcome> {
        let participant = Email::new(input.participant_email)?;
        let creator = Email::new(input.creator_email)?;

        let payment = Payment::new(
            input.contest_id,
            input.contest_name,
            participant.into_string(),
            input.amount,
        );

        let outcome = self.payments.record(&payment, creator.as_str()).await?;

        match outcome {
            RecordOutcome::Recorded => {
                tracing::info!(
                    contest_id = %payment.contest_id,
                    participant = %payment.participant_email,
                    amount = payment.amount,
                    "Payment recorded"
                );
            }
            RecordOutcome::Duplicate => {
                tracing::debug!(
                    contest_id = %payment.contest_id,
                    participant = %payment.participant_email,
                    "Duplicate payment ignored"
                );
            }
        }

        Ok(outcome)
    }
}
