//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and the token service
//! - `infra/` - PostgreSQL and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Registration with username, email and password
//! - Login by email + password, answered with a bearer token
//! - Bearer-token middleware and `CurrentUser` extractor for other crates
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - Tokens are HS256-signed, carry `user_id` + `exp`, live one hour
//! - No revocation: a token is valid until it expires

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::TokenService;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::MemoryAuthRepository, postgres::PgAuthRepository};
pub use presentation::middleware::{AuthMiddlewareState, CurrentUser, require_bearer_token};
pub use presentation::router::auth_router;
