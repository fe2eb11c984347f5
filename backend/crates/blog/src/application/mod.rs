//! Application Layer
//!
//! Use cases for posts and comments.

pub mod comments;
pub mod posts;

// Re-exports
pub use comments::{AddCommentInput, AddCommentUseCase, ListCommentsUseCase};
pub use posts::{AddPostInput, AddPostUseCase, ListPostsUseCase};
