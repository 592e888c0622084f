//! List Payments Use Case

use std::sync::Arc;

use crate::domain::entity::payment::Payment;
use crate::domain::repository::PaymentRepository;
use crate::error::PaymentResult;

pub struct ListPaymentsUseCase<P>
where
    P: PaymentRepository,
{
    payments: Arc<P>,
}

impl<P> ListPaymentsUseCase<P>
where
    P: PaymentRepository,
{
    pub fn new(payments: Arc<P>) -> Self {
        Self { payments }
    }

    /// All payments made by one participant
    pub async fn for_participant(&self, participant_email: &str) -> PaymentResult<Vec<Payment>> {
        self.payments.list_by_participant(participant_email).await
    }
}
