//! Payment Provider Gateway Trait

use crate::error::PaymentResult;

/// Outbound bridge to the external payment provider
#[trait_variant::make(PaymentGateway: Send)]
pub trait LocalPaymentGateway {
    /// Create a payment intent for an amount in minor currency units
    /// and return the provider's opaque client secret
    async fn create_intent(&self, amount_minor: i64, currency: &str) -> PaymentResult<String>;
}
