//! Signed Tokens
//!
//! Compact HS256 tokens (JWT) over arbitrary claim types. The claim type
//! must carry an `exp` field (Unix seconds); expiry is checked with zero
//! leeway.

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind as JwtErrorKind,
};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// No signing key configured
    #[error("Signing key is missing")]
    MissingKey,

    /// Encoding or signing failed
    #[error("Token signing failed: {0}")]
    Signing(String),

    /// `exp` is in the past
    #[error("Token has expired")]
    Expired,

    /// Malformed token, bad signature, wrong algorithm or missing claim
    #[error("Invalid token: {0}")]
    Invalid(String),
}

/// Symmetric key pair for signing and verifying
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenKeys {
    /// Build keys from a shared secret
    ///
    /// ## Errors
    /// `TokenError::MissingKey` if the secret is empty
    pub fn from_secret(secret: &[u8]) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::MissingKey);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;

        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        })
    }

    /// Sign claims into a compact token string
    pub fn sign<C: Serialize>(&self, claims: &C) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify signature and expiry, then decode the claims
    pub fn verify<C: DeserializeOwned>(&self, token: &str) -> Result<C, TokenError> {
        decode::<C>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })
    }
}

impl std::fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenKeys")
            .field("algorithm", &"HS256")
            .finish_non_exhaustive()
    }
}
