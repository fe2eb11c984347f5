//! In-Memory Repository Implementation
//!
//! Backs the router tests and the end-to-end flow test.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{UserId, email::Email};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Inner {
    next_id: i64,
    users: BTreeMap<UserId, User>,
}

/// In-memory auth repository; clones share the same data
#[derive(Clone, Default)]
pub struct MemoryAuthRepository {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a stored user directly
    pub async fn find_user(&self, email: &Email) -> Option<User> {
        let inner = self.inner.read().await;
        inner.users.values().find(|u| &u.email == email).cloned()
    }
}

impl UserRepository for MemoryAuthRepository {
    async fn create(&self, user: NewUser) -> AuthResult<User> {
        let mut inner = self.inner.write().await;

        if inner.users.values().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }

        inner.next_id += 1;
        let user = User::from_new(UserId::new(inner.next_id), user);
        inner.users.insert(user.user_id, user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self.find_user(email).await)
    }
}
