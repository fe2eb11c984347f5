//! User Name Value Object
//!
//! Display name chosen at registration. Not unique and not used for login.

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};

/// User name value object
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct UserName(String);

impl UserName {
    /// Trim surrounding whitespace; reject blank input
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let trimmed = raw.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(AppError::bad_request("Username cannot be empty"));
        }
        Ok(Self(trimmed))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_trimmed() {
        let name = UserName::new("  alice ").unwrap();
        assert_eq!(name.as_str(), "alice");
        assert_eq!(name.to_string(), "alice");
    }

    #[test]
    fn test_user_name_blank() {
        assert!(UserName::new("").is_err());
        assert!(UserName::new("   ").is_err());
    }
}
