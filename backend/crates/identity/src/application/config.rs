//! Application Configuration
//!
//! Configuration for the Identity application layer.

/// Re-export cookie types from platform
pub use platform::cookie::{CookieConfig, SameSite};

/// Seconds in a 365-day token lifetime
pub const TOKEN_TTL_SECS: i64 = 365 * 24 * 3600;

/// Identity application configuration
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Token cookie (name, Secure/SameSite policy, Max-Age)
    pub cookie: CookieConfig,
    /// HMAC secret for token signing (32 bytes)
    pub token_secret: [u8; 32],
    /// Token lifetime in seconds
    pub token_ttl_secs: i64,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            cookie: CookieConfig::production(TOKEN_TTL_SECS),
            token_secret: [0u8; 32],
            token_ttl_secs: TOKEN_TTL_SECS,
        }
    }
}

impl IdentityConfig {
    /// Production config with the given secret
    pub fn new(token_secret: [u8; 32]) -> Self {
        Self {
            token_secret,
            ..Default::default()
        }
    }

    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure same-site cookie)
    pub fn development() -> Self {
        Self {
            cookie: CookieConfig::development(TOKEN_TTL_SECS),
            ..Self::with_random_secret()
        }
    }
}
