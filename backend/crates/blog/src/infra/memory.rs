//! In-Memory Repository Implementation

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entities::{Comment, NewComment, NewPost, Post};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::domain::value_objects::{CommentId, PostId};
use crate::error::{BlogError, BlogResult};

#[derive(Default)]
struct Inner {
    next_post_id: i64,
    next_comment_id: i64,
    posts: BTreeMap<PostId, Post>,
    comments: BTreeMap<CommentId, Comment>,
}

/// In-memory blog repository; clones share the same data
///
/// Maps are keyed by id, so iteration is already in ascending id order.
#[derive(Clone, Default)]
pub struct MemoryBlogRepository {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PostRepository for MemoryBlogRepository {
    async fn create_post(&self, post: NewPost) -> BlogResult<Post> {
        let mut inner = self.inner.write().await;

        inner.next_post_id += 1;
        let post = Post::from_new(PostId::new(inner.next_post_id), post);
        inner.posts.insert(post.id, post.clone());

        Ok(post)
    }

    async fn list_posts(&self) -> BlogResult<Vec<Post>> {
        let inner = self.inner.read().await;
        Ok(inner.posts.values().cloned().collect())
    }
}

impl CommentRepository for MemoryBlogRepository {
    async fn create_comment(&self, comment: NewComment) -> BlogResult<Comment> {
        let mut inner = self.inner.write().await;

        if !inner.posts.contains_key(&comment.post_id) {
            return Err(BlogError::PostNotFound);
        }

        inner.next_comment_id += 1;
        let comment = Comment::from_new(CommentId::new(inner.next_comment_id), comment);
        inner.comments.insert(comment.id, comment.clone());

        Ok(comment)
    }

    async fn list_comments(&self, post_id: PostId) -> BlogResult<Vec<Comment>> {
        let inner = self.inner.read().await;
        Ok(inner
            .comments
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }
}
