//! Comment Use Cases

use std::sync::Arc;

use crate::domain::entities::{Comment, NewComment};
use crate::domain::repository::CommentRepository;
use crate::domain::value_objects::{CommentBody, PostId, UserId};
use crate::error::BlogResult;

/// Add comment input
pub struct AddCommentInput {
    /// Authenticated author
    pub user_id: UserId,
    pub post_id: PostId,
    pub comment: String,
}

/// Add comment use case
pub struct AddCommentUseCase<C>
where
    C: CommentRepository,
{
    comment_repo: Arc<C>,
}

impl<C> AddCommentUseCase<C>
where
    C: CommentRepository,
{
    pub fn new(comment_repo: Arc<C>) -> Self {
        Self { comment_repo }
    }

    pub async fn execute(&self, input: AddCommentInput) -> BlogResult<Comment> {
        let new_comment = NewComment {
            user_id: input.user_id,
            post_id: input.post_id,
            comment: CommentBody::new(input.comment)?,
        };

        let comment = self.comment_repo.create_comment(new_comment).await?;

        tracing::info!(
            comment_id = %comment.id,
            post_id = %comment.post_id,
            user_id = %comment.user_id,
            "Comment added"
        );

        Ok(comment)
    }
}

/// List comments use case
pub struct ListCommentsUseCase<C>
where
    C: CommentRepository,
{
    comment_repo: Arc<C>,
}

impl<C> ListCommentsUseCase<C>
where
    C: CommentRepository,
{
    pub fn new(comment_repo: Arc<C>) -> Self {
        Self { comment_repo }
    }

    pub async fn execute(&self, post_id: PostId) -> BlogResult<Vec<Comment>> {
        self.comment_repo.list_comments(post_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::posts::{AddPostInput, AddPostUseCase};
    use crate::error::BlogError;
    use crate::infra::memory::MemoryBlogRepository;

    async fn seed_post(repo: &Arc<MemoryBlogRepository>) -> PostId {
        AddPostUseCase::new(repo.clone())
            .execute(AddPostInput {
                user_id: UserId::new(1),
                title: "t".to_string(),
                description: "d".to_string(),
            })
            .await
            .unwrap()
            .id
    }

    fn input(post_id: PostId, text: &str) -> AddCommentInput {
        AddCommentInput {
            user_id: UserId::new(2),
            post_id,
            comment: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_comments_scoped_to_post() {
        let repo = Arc::new(MemoryBlogRepository::new());
        let a = seed_post(&repo).await;
        let b = seed_post(&repo).await;

        let add = AddCommentUseCase::new(repo.clone());
        add.execute(input(a, "on a")).await.unwrap();
        add.execute(input(b, "on b")).await.unwrap();
        add.execute(input(a, "also on a")).await.unwrap();

        let list = ListCommentsUseCase::new(repo);
        let on_a = list.execute(a).await.unwrap();
        let texts: Vec<&str> = on_a.iter().map(|c| c.comment.as_str()).collect();
        assert_eq!(texts, ["on a", "also on a"]);
        assert!(on_a.iter().all(|c| c.post_id == a && c.user_id == UserId::new(2)));
    }

    #[tokio::test]
    async fn test_comment_on_missing_post() {
        let repo = Arc::new(MemoryBlogRepository::new());
        let result = AddCommentUseCase::new(repo)
            .execute(input(PostId::new(99), "hello"))
            .await;

        assert!(matches!(result, Err(BlogError::PostNotFound)));
    }

    #[tokio::test]
    async fn test_list_for_unknown_post_is_empty() {
        let repo = Arc::new(MemoryBlogRepository::new());
        let comments = ListCommentsUseCase::new(repo)
            .execute(PostId::new(99))
            .await
            .unwrap();
        assert!(comments.is_empty());
    }

    #[tokio::test]
    async fn test_blank_comment_rejected() {
        let repo = Arc::new(MemoryBlogRepository::new());
        let post_id = seed_post(&repo).await;

        let result = AddCommentUseCase::new(repo).execute(input(post_id, "")).await;
        assert!(matches!(result, Err(BlogError::InvalidInput(_))));
    }
}
