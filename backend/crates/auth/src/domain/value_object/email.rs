//! Email Value Object
//!
//! Login identifier. Uniqueness is enforced by the store; this type only
//! normalizes (trim + lowercase) so that lookups and the unique index agree.

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct Email(String);

impl Email {
    /// Create a new email; only presence is checked
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into().trim().to_lowercase();

        if email.is_empty() {
            return Err(AppError::bad_request("Email cannot be empty"));
        }

        Ok(Self(email))
    }

    /// Create from database value (assumed already normalized)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_case_normalization() {
        let email = Email::new("  A@X.com ").unwrap();
        assert_eq!(email.as_str(), "a@x.com");
    }

    #[test]
    fn test_email_blank() {
        assert!(Email::new("").is_err());
        assert!(Email::new(" \n").is_err());
    }

    #[test]
    fn test_email_format_not_enforced() {
        // Format checks are out of scope; any non-blank value is accepted
        assert!(Email::new("not-an-email").is_ok());
    }
}
