//! Domain Entities

use crate::domain::value_objects::{
    CommentBody, CommentId, PostDescription, PostId, PostTitle, UserId,
};

/// Post about to be inserted
#[derive(Debug, Clone)]
pub struct NewPost {
    /// Author, taken from the verified token
    pub user_id: UserId,
    pub title: PostTitle,
    pub description: PostDescription,
}

/// Stored post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub title: PostTitle,
    pub description: PostDescription,
}

impl Post {
    pub fn from_new(id: PostId, new_post: NewPost) -> Self {
        Self {
            id,
            user_id: new_post.user_id,
            title: new_post.title,
            description: new_post.description,
        }
    }
}

/// Comment about to be inserted
#[derive(Debug, Clone)]
pub struct NewComment {
    pub user_id: UserId,
    pub post_id: PostId,
    pub comment: CommentBody,
}

/// Stored comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub user_id: UserId,
    pub post_id: PostId,
    pub comment: CommentBody,
}

impl Comment {
    pub fn from_new(id: CommentId, new_comment: NewComment) -> Self {
        Self {
            id,
            user_id: new_comment.user_id,
            post_id: new_comment.post_id,
            comment: new_comment.comment,
        }
    }
}
