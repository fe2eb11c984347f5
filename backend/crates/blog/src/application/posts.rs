//! Post Use Cases

use std::sync::Arc;

use crate::domain::entities::{NewPost, Post};
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::{PostDescription, PostTitle, UserId};
use crate::error::BlogResult;

/// Add post input
pub struct AddPostInput {
    /// Authenticated author
    pub user_id: UserId,
    pub title: String,
    pub description: String,
}

/// Add post use case
pub struct AddPostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> AddPostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, input: AddPostInput) -> BlogResult<Post> {
        let new_post = NewPost {
            user_id: input.user_id,
            title: PostTitle::new(input.title)?,
            description: PostDescription::new(input.description)?,
        };

        let post = self.post_repo.create_post(new_post).await?;

        tracing::info!(post_id = %post.id, user_id = %post.user_id, "Post added");

        Ok(post)
    }
}

/// List posts use case
pub struct ListPostsUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> ListPostsUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self) -> BlogResult<Vec<Post>> {
        self.post_repo.list_posts().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlogError;
    use crate::infra::memory::MemoryBlogRepository;

    fn input(title: &str) -> AddPostInput {
        AddPostInput {
            user_id: UserId::new(1),
            title: title.to_string(),
            description: "body".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let repo = Arc::new(MemoryBlogRepository::new());
        let add = AddPostUseCase::new(repo.clone());

        let first = add.execute(input("first")).await.unwrap();
        let second = add.execute(input("second")).await.unwrap();
        assert!(first.id < second.id);

        let posts = ListPostsUseCase::new(repo).execute().await.unwrap();
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["first", "second"]);
        assert!(posts.iter().all(|p| p.user_id == UserId::new(1)));
    }

    #[tokio::test]
    async fn test_list_empty() {
        let repo = Arc::new(MemoryBlogRepository::new());
        let posts = ListPostsUseCase::new(repo).execute().await.unwrap();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_blank_title_rejected() {
        let repo = Arc::new(MemoryBlogRepository::new());
        let result = AddPostUseCase::new(repo.clone()).execute(input(" ")).await;

        assert!(matches!(result, Err(BlogError::InvalidInput(_))));
        assert!(repo.list_posts().await.unwrap().is_empty());
    }
}
