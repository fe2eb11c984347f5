//! API Application
//!
//! Wires the auth and blog routers together. The binary in `main.rs` adds
//! configuration, the database pool and the outer tower layers.

pub mod config;

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::{AuthConfig, AuthMiddlewareState, AuthResult, TokenService, auth_router};
use axum::{Json, Router, routing::get};
use blog::blog_router;
use blog::domain::repository::{CommentRepository, PostRepository};
use serde_json::{Value, json};

/// Build the full router over the given stores
///
/// ## Errors
/// Fails if `auth_config` carries no token secret.
pub fn build_app<U, B>(users: Arc<U>, posts: Arc<B>, auth_config: AuthConfig) -> AuthResult<Router>
where
    U: UserRepository + Send + Sync + 'static,
    B: PostRepository + CommentRepository + Send + Sync + 'static,
{
    let tokens = Arc::new(TokenService::new(&auth_config)?);
    let auth_config = Arc::new(auth_config);

    Ok(Router::new()
        .route("/health", get(health))
        .merge(auth_router(users, auth_config, tokens.clone()))
        .merge(blog_router(posts, AuthMiddlewareState::new(tokens))))
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "message": "OK" }))
}
