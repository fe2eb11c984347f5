//! Token Service
//!
//! Issues and verifies the bearer tokens handed out by login.

use chrono::Utc;
use platform::token::TokenKeys;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::config::AuthConfig;
use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

/// Claims carried by a bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub user_id: UserId,
    /// Expiry, Unix seconds
    pub exp: i64,
}

/// Signs and verifies access tokens with the process-wide key
///
/// There is no revocation list: a token stays valid until `exp`.
#[derive(Debug, Clone)]
pub struct TokenService {
    keys: TokenKeys,
    ttl: Duration,
}

impl TokenService {
    /// ## Errors
    /// `AuthError::TokenSigning` if the config carries no secret
    pub fn new(config: &AuthConfig) -> AuthResult<Self> {
        Ok(Self {
            keys: TokenKeys::from_secret(&config.token_secret)?,
            ttl: config.token_ttl,
        })
    }

    /// Issue a token for `user_id` that expires `ttl` from now
    pub fn issue(&self, user_id: UserId) -> AuthResult<String> {
        let ttl = chrono::Duration::from_std(self.ttl)
            .map_err(|e| AuthError::TokenSigning(format!("Invalid token TTL: {e}")))?;

        let exp = Utc::now()
            .checked_add_signed(ttl)
            .ok_or_else(|| AuthError::TokenSigning("Token expiry out of range".to_string()))?
            .timestamp();

        let claims = AccessClaims { user_id, exp };

        self.sign(&claims)
    }

    /// Verify signature and expiry
    pub fn verify(&self, token: &str) -> AuthResult<AccessClaims> {
        Ok(self.keys.verify(token)?)
    }

    fn sign(&self, claims: &AccessClaims) -> AuthResult<String> {
        Ok(self.keys.sign(claims)?)
    }
}
