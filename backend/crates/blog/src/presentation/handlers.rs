//! HTTP Handlers

use auth::CurrentUser;
use auth::presentation::dto::MessageResponse;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use std::sync::Arc;

use crate::application::{
    AddCommentInput, AddCommentUseCase, AddPostInput, AddPostUseCase, ListCommentsUseCase,
    ListPostsUseCase,
};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::domain::value_objects::PostId;
use crate::error::BlogResult;
use crate::presentation::dto::{AddCommentRequest, AddPostRequest, CommentListResponse, PostListResponse};

/// Shared state for blog handlers
pub struct BlogAppState<R>
where
    R: PostRepository + CommentRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> Clone for BlogAppState<R>
where
    R: PostRepository + CommentRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

// ============================================================================
// Posts
// ============================================================================

/// GET /posts
pub async fn list_posts<R>(State(state): State<BlogAppState<R>>) -> BlogResult<Json<PostListResponse>>
where
    R: PostRepository + CommentRepository + Send + Sync + 'static,
{
    let posts = ListPostsUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(PostListResponse {
        posts: posts.into_iter().map(Into::into).collect(),
    }))
}

/// POST /posts (bearer)
pub async fn add_post<R>(
    State(state): State<BlogAppState<R>>,
    user: CurrentUser,
    payload: Result<Json<AddPostRequest>, JsonRejection>,
) -> BlogResult<Json<MessageResponse>>
where
    R: PostRepository + CommentRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let input = AddPostInput {
        user_id: user.user_id,
        title: req.title,
        description: req.description,
    };

    AddPostUseCase::new(state.repo.clone()).execute(input).await?;

    Ok(Json(MessageResponse::new("Post added successfully")))
}

// ============================================================================
// Comments
// ============================================================================

/// GET /posts/{id}/comment
pub async fn list_comments<R>(
    State(state): State<BlogAppState<R>>,
    post_id: Result<Path<i64>, PathRejection>,
) -> BlogResult<Json<CommentListResponse>>
where
    R: PostRepository + CommentRepository + Send + Sync + 'static,
{
    let Path(post_id) = post_id?;

    let comments = ListCommentsUseCase::new(state.repo.clone())
        .execute(PostId::new(post_id))
        .await?;

    Ok(Json(CommentListResponse {
        comments: comments.into_iter().map(Into::into).collect(),
    }))
}

/// POST /posts/{id}/comment (bearer)
pub async fn add_comment<R>(
    State(state): State<BlogAppState<R>>,
    user: CurrentUser,
    post_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<AddCommentRequest>, JsonRejection>,
) -> BlogResult<Json<MessageResponse>>
where
    R: PostRepository + CommentRepository + Send + Sync + 'static,
{
    let Path(post_id) = post_id?;
    let Json(req) = payload?;

    let input = AddCommentInput {
        user_id: user.user_id,
        post_id: PostId::new(post_id),
        comment: req.comment,
    };

    AddCommentUseCase::new(state.repo.clone()).execute(input).await?;

    Ok(Json(MessageResponse::new("Comment added successfully")))
}
