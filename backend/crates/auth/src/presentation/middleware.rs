//! Auth Middleware
//!
//! Bearer-token check for protected routes, and the `CurrentUser`
//! extractor handlers use to read the authenticated user.

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::application::token::TokenService;
use crate::domain::value_object::UserId;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub tokens: Arc<TokenService>,
}

impl AuthMiddlewareState {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

/// Authenticated user, stored in request extensions by
/// [`require_bearer_token`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: UserId,
}

/// Middleware that requires a valid `Authorization: Bearer <token>` header
///
/// On failure the request is answered with 401 and never reaches the
/// handler.
pub async fn require_bearer_token(
    State(state): State<AuthMiddlewareState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?;

    let token = header_value
        .to_str()
        .ok()
        .and_then(bearer_token)
        .ok_or(AuthError::InvalidToken)?;

    let claims = state.tokens.verify(token)?;

    tracing::debug!(user_id = %claims.user_id, "Bearer token accepted");

    req.extensions_mut().insert(CurrentUser {
        user_id: claims.user_id,
    });

    Ok(next.run(req).await)
}

/// Strip the `Bearer` scheme (case-insensitive) from a header value
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .copied()
            .ok_or(AuthError::MissingToken)
    }
}
