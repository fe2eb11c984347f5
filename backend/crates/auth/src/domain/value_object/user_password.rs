//! User Password Value Object
//!
//! Domain wrapper around `platform::password`. Maps platform errors to
//! user-facing `AppError`s.

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{
    ClearTextPassword, HashedPassword, PasswordCost, PasswordPolicyError,
};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input (zeroized on drop)
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::EmptyOrWhitespace => {
                AppError::bad_request("Password cannot be empty")
                    .with_action("Please enter a password")
            }
        })?;

        Ok(Self(clear_text))
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password (Argon2id PHC string)
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password
    ///
    /// ## Errors
    /// Internal error if the configured cost is rejected by Argon2
    pub fn from_raw(
        raw: &RawPassword,
        cost: &PasswordCost,
        pepper: Option<&[u8]>,
    ) -> AppResult<Self> {
        let hashed = raw
            .0
            .hash(cost, pepper)
            .map_err(|e| AppError::internal("Failed to generate password hash").with_source(e))?;

        Ok(Self(hashed))
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> AppResult<Self> {
        let hashed = HashedPassword::from_phc_string(phc_string)
            .map_err(|e| AppError::internal("Invalid password hash in database").with_source(e))?;

        Ok(Self(hashed))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Constant-time verification; `pepper` must match the one used when hashing
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(&raw.0, pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(s: &str) -> RawPassword {
        RawPassword::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_raw_password_presence() {
        assert!(RawPassword::new("pw".to_string()).is_ok());

        let err = RawPassword::new("".to_string()).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_hash_and_verify() {
        let hashed = UserPassword::from_raw(&raw("pw"), &PasswordCost::minimal(), None).unwrap();

        assert!(hashed.verify(&raw("pw"), None));
        assert!(!hashed.verify(&raw("wrong"), None));
    }

    #[test]
    fn test_invalid_cost_is_internal_error() {
        let cost = PasswordCost {
            memory_kib: 0,
            iterations: 0,
            parallelism: 0,
        };
        let err = UserPassword::from_raw(&raw("pw"), &cost, None).unwrap_err();
        assert!(err.is_server_error());
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let hashed = UserPassword::from_raw(&raw("pw"), &PasswordCost::minimal(), None).unwrap();
        let restored = UserPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&raw("pw"), None));
    }

    #[test]
    fn test_debug_redaction() {
        let debug = format!("{:?}", raw("SecretPassword"));
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Secret"));
    }
}
