//! Create Payment Intent Use Case
//!
//! Converts a major-unit price to the provider's minor-unit amount and
//! requests an intent. Writes no local state; recording happens only
//! after the client completes the payment.

use std::sync::Arc;

use crate::application::config::PaymentConfig;
use crate::domain::gateway::PaymentGateway;
use crate::error::{PaymentError, PaymentResult};

pub struct CreateIntentUseCase<G>
where
    G: PaymentGateway,
{
    gateway: Arc<G>,
    config: Arc<PaymentConfig>,
}

impl<G> CreateIntentUseCase<G>
where
    G: PaymentGateway,
{
    pub fn new(gateway: Arc<G>, config: Arc<PaymentConfig>) -> Self {
        Self { gateway, config }
    }

    pub async fn execute(&self, price: Option<f64>) -> PaymentResult<String> {
        let amount = minor_units(price)?;

        let client_secret = self
            .gateway
            .create_intent(amount, &self.config.currency)
            .await?;

        tracing::debug!(amount, currency = %self.config.currency, "Payment intent created");

        Ok(client_secret)
    }
}

/// Major-unit price to minor units; anything below one minor unit is
/// rejected before the provider is contacted
fn minor_units(price: Option<f64>) -> PaymentResult<i64> {
    let price = price.ok_or(PaymentError::InvalidAmount)?;

    if !price.is_finite() {
        return Err(PaymentError::InvalidAmount);
    }

    let amount = (price * 100.0).round() as i64;
    if amount < 1 {
        return Err(PaymentError::InvalidAmount);
    }

    Ok(amount)
}
