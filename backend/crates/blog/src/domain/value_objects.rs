//! Domain Value Objects
//!
//! Required text fields. Only presence is checked: the value must contain
//! something other than whitespace. The text itself is stored as sent.

use kernel::error::app_error::{AppError, AppResult};
use serde::Serialize;

pub use kernel::id::{CommentId, PostId, UserId};

fn require_text(raw: String, field: &'static str) -> AppResult<String> {
    if raw.trim().is_empty() {
        return Err(AppError::bad_request(format!("{field} cannot be empty")));
    }
    Ok(raw)
}

/// Post title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(raw: String) -> AppResult<Self> {
        require_text(raw, "Title").map(Self)
    }

    pub fn from_db(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Post body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PostDescription(String);

impl PostDescription {
    pub fn new(raw: String) -> AppResult<Self> {
        require_text(raw, "Description").map(Self)
    }

    pub fn from_db(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Comment text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommentBody(String);

impl CommentBody {
    pub fn new(raw: String) -> AppResult<Self> {
        require_text(raw, "Comment").map(Self)
    }

    pub fn from_db(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
