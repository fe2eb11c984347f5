//! Blog Backend Module
//!
//! Posts and comments. Listing is public; writing requires a bearer token
//! checked by `auth::require_bearer_token`.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{BlogError, BlogResult};
pub use infra::{memory::MemoryBlogRepository, postgres::PgBlogRepository};
pub use presentation::router::blog_router;
