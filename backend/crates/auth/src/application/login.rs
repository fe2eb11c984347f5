//! Login Use Case
//!
//! Checks credentials and issues a bearer token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            tokens,
            config,
        }
    }

    /// Unknown email and wrong password both yield `InvalidCredentials`
    /// after the same amount of Argon2 work.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let email = Email::new(input.email)?;
        let raw_password = RawPassword::new(input.password)?;

        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            // One hash at the configured cost, matching the verify path
            let _ = UserPassword::from_raw(
                &raw_password,
                &self.config.password_cost,
                self.config.pepper(),
            );
            return Err(AuthError::InvalidCredentials);
        };

        if !user.password_hash.verify(&raw_password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.user_id)?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput { token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::application::config::PasswordCost;
    use crate::infra::memory::MemoryAuthRepository;
    use std::time::{Duration, Instant};

    struct Fixture {
        repo: Arc<MemoryAuthRepository>,
        config: Arc<AuthConfig>,
        tokens: Arc<TokenService>,
    }

    impl Fixture {
        fn new() -> Self {
            Self::with_config(AuthConfig::for_tests())
        }

        fn with_config(config: AuthConfig) -> Self {
            let config = Arc::new(config);
            let tokens = Arc::new(TokenService::new(&config).unwrap());
            Self {
                repo: Arc::new(MemoryAuthRepository::new()),
                config,
                tokens,
            }
        }

        async fn register(&self, email: &str, password: &str) {
            RegisterUseCase::new(self.repo.clone(), self.config.clone())
                .execute(RegisterInput {
                    user_name: "alice".to_string(),
                    email: email.to_string(),
                    password: password.to_string(),
                })
                .await
                .unwrap();
        }

        async fn login(&self, email: &str, password: &str) -> AuthResult<LoginOutput> {
            LoginUseCase::new(self.repo.clone(), self.tokens.clone(), self.config.clone())
                .execute(LoginInput {
                    email: email.to_string(),
                    password: password.to_string(),
                })
                .await
        }
    }

    #[tokio::test]
    async fn test_login_issues_token_for_user() {
        let fx = Fixture::new();
        fx.register("a@x.com", "pw").await;

        let output = fx.login("a@x.com", "pw").await.unwrap();
        let claims = fx.tokens.verify(&output.token).unwrap();

        let stored = fx
            .repo
            .find_user(&Email::new("a@x.com").unwrap())
            .await
            .unwrap();
        assert_eq!(claims.user_id, stored.user_id);
    }

    #[tokio::test]
    async fn test_login_email_is_case_insensitive() {
        let fx = Fixture::new();
        fx.register("a@x.com", "pw").await;

        assert!(fx.login("A@X.com", "pw").await.is_ok());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let fx = Fixture::new();
        fx.register("a@x.com", "pw").await;

        let result = fx.login("a@x.com", "nope").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let fx = Fixture::new();

        let result = fx.login("ghost@x.com", "pw").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    async fn fastest_login(fx: &Fixture, email: &str, password: &str) -> Duration {
        let mut fastest = Duration::MAX;
        for _ in 0..3 {
            let start = Instant::now();
            assert!(fx.login(email, password).await.is_err());
            fastest = fastest.min(start.elapsed());
        }
        fastest
    }

    #[tokio::test]
    async fn test_unknown_email_costs_a_hash() {
        let fx = Fixture::with_config(AuthConfig {
            password_cost: PasswordCost {
                memory_kib: 8 * 1024,
                iterations: 2,
                parallelism: 1,
            },
            ..AuthConfig::for_tests()
        });
        fx.register("a@x.com", "pw").await;

        let wrong_password = fastest_login(&fx, "a@x.com", "nope").await;
        let unknown_email = fastest_login(&fx, "ghost@x.com", "nope").await;

        assert!(unknown_email * 4 >= wrong_password);
    }
}
