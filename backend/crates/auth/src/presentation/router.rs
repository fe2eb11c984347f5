//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router (`POST /register`, `POST /login`)
pub fn auth_router<R>(repo: Arc<R>, config: Arc<AuthConfig>, tokens: Arc<TokenService>) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo,
        config,
        tokens,
    };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::MemoryAuthRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> (Router, Arc<TokenService>) {
        let config = Arc::new(AuthConfig::for_tests());
        let tokens = Arc::new(TokenService::new(&config).unwrap());
        let router = auth_router(
            Arc::new(MemoryAuthRepository::new()),
            config,
            tokens.clone(),
        );
        (router, tokens)
    }

    async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn register_body(email: &str) -> String {
        json!({ "username": "alice", "email": email, "password": "pw" }).to_string()
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let (app, tokens) = app();

        let (status, body) = post_json(&app, "/register", &register_body("a@x.com")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "User registered successfully" }));

        let (status, body) = post_json(
            &app,
            "/login",
            &json!({ "email": "a@x.com", "password": "pw" }).to_string(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let token = body["token"].as_str().unwrap();
        assert_eq!(tokens.verify(token).unwrap().user_id.get(), 1);
    }

    #[tokio::test]
    async fn test_register_twice_conflicts() {
        let (app, _) = app();

        post_json(&app, "/register", &register_body("a@x.com")).await;
        let (status, body) = post_json(&app, "/register", &register_body("a@x.com")).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["status"], 409);
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let (app, _) = app();

        let (status, body) = post_json(&app, "/register", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (status, _) =
            post_json(&app, "/login", &json!({ "email": "a@x.com" }).to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wrong_password_is_unauthorized() {
        let (app, _) = app();
        post_json(&app, "/register", &register_body("a@x.com")).await;

        let (status, body) = post_json(
            &app,
            "/login",
            &json!({ "email": "a@x.com", "password": "nope" }).to_string(),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Invalid credentials");
    }
}
