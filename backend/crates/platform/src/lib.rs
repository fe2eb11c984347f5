//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random bytes, Base64)
//! - Password hashing (Argon2id with a tunable cost)
//! - HMAC-signed compact tokens (HS256)

pub mod crypto;
pub mod password;
pub mod token;
