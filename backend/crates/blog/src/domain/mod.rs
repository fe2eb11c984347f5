//! Domain Layer
//!
//! Entities, value objects, and repository traits for posts and comments.

pub mod entities;
pub mod repository;
pub mod value_objects;

pub use entities::{Comment, NewComment, NewPost, Post};
pub use repository::{CommentRepository, PostRepository};
