//! Token Service
//!
//! Issues and verifies signed identity tokens. Stateless: the token is
//! the only credential, there is no server-side session row.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::config::IdentityConfig;
use crate::domain::value_object::email::Email;
use crate::error::{IdentityError, IdentityResult};

/// Token claims. `sub` carries the verified email and is the only
/// identity input any guard or handler may trust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User email
    pub sub: String,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

/// Signed-token issuer/verifier (HS256)
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &IdentityConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(&config.token_secret),
            decoding_key: DecodingKey::from_secret(&config.token_secret),
            ttl_secs: config.token_ttl_secs,
        }
    }

    pub fn from_config(config: Arc<IdentityConfig>) -> Self {
        Self::new(&config)
    }

    /// Issue a signed token for the given email
    pub fn issue(&self, email: &Email) -> IdentityResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: email.as_str().to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| IdentityError::Internal(format!("Token signing failed: {e}")))?;

        Ok(token)
    }

    /// Verify a token and return its claims.
    /// Malformed, expired, or mis-signed tokens all map to `InvalidToken`.
    pub fn verify(&self, token: &str) -> IdentityResult<Claims> {
        let validation = Validation::new(Algorithm::HS256);

        let data = decode::<Claims>(token, &self.decoding_key, &validation)?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::TOKEN_TTL_SECS;

    fn service() -> TokenService {
        TokenService::new(&IdentityConfig::with_random_secret())
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let svc = service();
        let email = Email::new("user@example.com").unwrap();

        let token = svc.issue(&email).unwrap();
        let claims = svc.verify(&token).unwrap();

        assert_eq!(claims.sub, "user@example.com");
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let svc = service();
        assert!(matches!(
            svc.verify("not-a-token"),
            Err(IdentityError::InvalidToken)
        ));
        assert!(matches!(svc.verify(""), Err(IdentityError::InvalidToken)));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let issuer = service();
        let verifier = service();

        let token = issuer
            .issue(&Email::new("user@example.com").unwrap())
            .unwrap();

        assert!(matches!(
            verifier.verify(&token),
            Err(IdentityError::InvalidToken)
        ));
    }

    #[test]
    fn test_verify_rejects_tampered_payload() {
        let svc = service();
        let token = svc
            .issue(&Email::new("user@example.com").unwrap())
            .unwrap();

        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        parts[1] = parts[1].chars().rev().collect();
        let tampered = parts.join(".");

        assert!(matches!(
            svc.verify(&tampered),
            Err(IdentityError::InvalidToken)
        ));
    }
}
