//! User Entity
//!
//! Identity plus credential. Created on registration, read on login,
//! never updated or deleted.

use crate::domain::value_object::{
    UserId, email::Email, user_name::UserName, user_password::UserPassword,
};

/// User about to be inserted (no id yet)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: UserName,
    pub email: Email,
    pub password_hash: UserPassword,
}

/// Stored user
#[derive(Debug, Clone)]
pub struct User {
    /// `users.id`
    pub user_id: UserId,
    pub user_name: UserName,
    /// Unique login identifier
    pub email: Email,
    pub password_hash: UserPassword,
}

impl User {
    /// Attach the id assigned by the store
    pub fn from_new(user_id: UserId, new_user: NewUser) -> Self {
        Self {
            user_id,
            user_name: new_user.user_name,
            email: new_user.email,
            password_hash: new_user.password_hash,
        }
    }
}
