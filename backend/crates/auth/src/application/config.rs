//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup
//! and shared read-only.

use std::fmt;
use std::time::Duration;

pub use platform::password::PasswordCost;

/// Default token lifetime
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC key for signing bearer tokens
    pub token_secret: Vec<u8>,
    /// Bearer token lifetime (1 hour)
    pub token_ttl: Duration,
    /// Argon2id cost parameters
    pub password_cost: PasswordCost,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    /// No signing key: `TokenService::new` refuses this until a secret is set.
    fn default() -> Self {
        Self {
            token_secret: Vec::new(),
            token_ttl: DEFAULT_TOKEN_TTL,
            password_cost: PasswordCost::default(),
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Config with an injected signing secret
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create config with a random signing secret (for development)
    ///
    /// Tokens do not survive a restart.
    pub fn with_random_secret() -> Self {
        Self::with_secret(platform::crypto::random_bytes(32))
    }

    /// Random secret plus the cheapest hashing cost; for tests.
    pub fn for_tests() -> Self {
        Self {
            password_cost: PasswordCost::minimal(),
            ..Self::with_random_secret()
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Token lifetime in whole seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_cost", &self.password_cost)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
