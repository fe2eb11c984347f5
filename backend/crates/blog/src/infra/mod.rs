//! Infrastructure Layer
//!
//! Database implementations.

pub mod memory;
pub mod postgres;

pub use memory::MemoryBlogRepository;
pub use postgres::PgBlogRepository;
