//! Application Configuration
//!
//! Configuration for the payment provider bridge.

/// Stripe's public API origin
pub const STRIPE_API_BASE: &str = "https://api.stripe.com";

/// Payment application configuration
#[derive(Debug, Clone)]
pub struct PaymentConfig {
    /// Provider secret key (bearer credential)
    pub secret_key: String,
    /// ISO currency code for created intents
    pub currency: String,
    /// Provider API origin; overridden in tests
    pub api_base: String,
}

impl PaymentConfig {
    /// Production config with the given provider secret key
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            currency: "usd".to_string(),
            api_base: STRIPE_API_BASE.to_string(),
        }
    }

    /// Create config for development (provider test key)
    pub fn development() -> Self {
        Self::new("sk_test_placeholder")
    }
}
