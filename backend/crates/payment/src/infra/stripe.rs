//! Stripe Gateway
//!
//! Thin wire adapter for the provider's payment-intent endpoint. The
//! secret key never leaves this module; handlers only ever see the
//! returned client secret.

use std::sync::Arc;

use crate::application::config::PaymentConfig;
use crate::domain::gateway::PaymentGateway;
use crate::error::{PaymentError, PaymentResult};

/// Stripe-backed payment gateway
#[derive(Clone)]
pub struct StripeGateway {
    http: reqwest::Client,
    config: Arc<PaymentConfig>,
}

impl StripeGateway {
    pub fn new(config: Arc<PaymentConfig>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

impl PaymentGateway for StripeGateway {
    async fn create_intent(&self, amount_minor: i64, currency: &str) -> PaymentResult<String> {
        let url = format!("{}/v1/payment_intents", self.config.api_base);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.secret_key)
            .form(&[
                ("amount", amount_minor.to_string()),
                ("currency", currency.to_string()),
                ("payment_method_types[]", "card".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body: serde_json::Value = response.json().await?;

        if !status.is_success() {
            let message = body
                .pointer("/error/message")
                .and_then(|m| m.as_str())
                .unwrap_or("intent request rejected");
            return Err(PaymentError::Provider(format!("{status}: {message}")));
        }

        body.get("client_secret")
            .and_then(|s| s.as_str())
            .map(str::to_string)
            .ok_or_else(|| PaymentError::Provider("response missing client_secret".to_string()))
    }
}
