//! Blog Router

use auth::{AuthMiddlewareState, require_bearer_token};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::{CommentRepository, PostRepository};
use crate::presentation::handlers::{self, BlogAppState};

/// Create the Blog router
///
/// `GET` routes are public; `POST` routes sit behind the bearer-token
/// middleware.
pub fn blog_router<R>(repo: Arc<R>, auth: AuthMiddlewareState) -> Router
where
    R: PostRepository + CommentRepository + Send + Sync + 'static,
{
    let state = BlogAppState { repo };
    let require_auth = from_fn_with_state(auth, require_bearer_token);

    Router::new()
        .route(
            "/posts",
            get(handlers::list_posts::<R>)
                .merge(post(handlers::add_post::<R>).route_layer(require_auth.clone())),
        )
        .route(
            "/posts/{id}/comment",
            get(handlers::list_comments::<R>)
                .merge(post(handlers::add_comment::<R>).route_layer(require_auth)),
        )
        .with_state(state)
}
