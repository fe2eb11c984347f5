//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<()> {
        let user_name = UserName::new(input.user_name)?;
        let email = Email::new(input.email)?;

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)?;
        let password_hash =
            UserPassword::from_raw(&raw_password, &self.config.password_cost, self.config.pepper())
                .map_err(|e| AuthError::PasswordHashing(e.to_string()))?;

        // Uniqueness is left to the store so concurrent registrations cannot race
        let user = self
            .user_repo
            .create(NewUser {
                user_name,
                email,
                password_hash,
            })
            .await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::MemoryAuthRepository;

    fn use_case(repo: &MemoryAuthRepository) -> RegisterUseCase<MemoryAuthRepository> {
        RegisterUseCase::new(Arc::new(repo.clone()), Arc::new(AuthConfig::for_tests()))
    }

    fn input(email: &str) -> RegisterInput {
        RegisterInput {
            user_name: "alice".to_string(),
            email: email.to_string(),
            password: "pw".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_plaintext() {
        let repo = MemoryAuthRepository::new();
        use_case(&repo).execute(input("a@x.com")).await.unwrap();

        let email = Email::new("a@x.com").unwrap();
        let stored = repo.find_user(&email).await.unwrap();
        assert_ne!(stored.password_hash.as_phc_string(), "pw");
        assert!(stored.password_hash.as_phc_string().starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let repo = MemoryAuthRepository::new();
        let use_case = use_case(&repo);

        use_case.execute(input("a@x.com")).await.unwrap();
        let result = use_case.execute(input(" A@X.COM")).await;

        assert!(matches!(result, Err(AuthError::EmailTaken)));
    }

    #[tokio::test]
    async fn test_register_blank_fields() {
        let repo = MemoryAuthRepository::new();
        let use_case = use_case(&repo);

        let mut blank_password = input("a@x.com");
        blank_password.password = String::new();
        assert!(matches!(
            use_case.execute(blank_password).await,
            Err(AuthError::InvalidInput(_))
        ));

        let mut blank_name = input("a@x.com");
        blank_name.user_name = "  ".to_string();
        assert!(matches!(
            use_case.execute(blank_name).await,
            Err(AuthError::InvalidInput(_))
        ));

        assert!(matches!(
            use_case.execute(input("")).await,
            Err(AuthError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_register_assigns_distinct_ids() {
        let repo = MemoryAuthRepository::new();
        let use_case = use_case(&repo);

        use_case.execute(input("a@x.com")).await.unwrap();
        use_case.execute(input("b@x.com")).await.unwrap();

        let a = repo.find_user(&Email::new("a@x.com").unwrap()).await.unwrap();
        let b = repo.find_user(&Email::new("b@x.com").unwrap()).await.unwrap();
        assert_ne!(a.user_id, b.user_id);
    }
}
