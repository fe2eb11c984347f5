//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{Comment, NewComment, NewPost, Post};
use crate::domain::value_objects::PostId;
use crate::error::BlogResult;

/// Post store
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Insert a post and return it with its assigned id
    async fn create_post(&self, post: NewPost) -> BlogResult<Post>;

    /// All posts, ascending id
    async fn list_posts(&self) -> BlogResult<Vec<Post>>;
}

/// Comment store
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// Insert a comment
    ///
    /// Fails with `BlogError::PostNotFound` if `post_id` does not exist.
    async fn create_comment(&self, comment: NewComment) -> BlogResult<Comment>;

    /// Comments on one post, ascending id; empty for an unknown post
    async fn list_comments(&self, post_id: PostId) -> BlogResult<Vec<Comment>>;
}
