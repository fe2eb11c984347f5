//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Comment, Post};
use crate::domain::value_objects::{CommentId, PostId, UserId};

// ============================================================================
// Posts
// ============================================================================

/// Add post request
#[derive(Debug, Clone, Deserialize)]
pub struct AddPostRequest {
    pub title: String,
    pub description: String,
}

/// One post in a listing
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: PostId,
    pub user_id: UserId,
    pub title: String,
    pub description: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            title: post.title.as_str().to_string(),
            description: post.description.as_str().to_string(),
        }
    }
}

/// `{"posts": [...]}`
#[derive(Debug, Clone, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
}

// ============================================================================
// Comments
// ============================================================================

/// Add comment request
#[derive(Debug, Clone, Deserialize)]
pub struct AddCommentRequest {
    pub comment: String,
}

/// One comment in a listing
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: CommentId,
    pub user_id: UserId,
    pub post_id: PostId,
    pub comment: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            user_id: comment.user_id,
            post_id: comment.post_id,
            comment: comment.comment.as_str().to_string(),
        }
    }
}

/// `{"comments": [...]}`
#[derive(Debug, Clone, Serialize)]
pub struct CommentListResponse {
    pub comments: Vec<CommentResponse>,
}
