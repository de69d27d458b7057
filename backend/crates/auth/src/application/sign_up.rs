//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_id::UserId,
    user_password::{RawPassword, UserPassword},
    user_role::UserRole,
    username::Username,
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub password: String,
    pub username: String,
    pub language: String,
    pub role: String,
}

/// Sign up output
pub struct SignUpOutput {
    pub user_id: UserId,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignUpUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        // Validate fields
        let email = Email::new(input.email)?;
        let username = Username::new(&input.username)
            .map_err(|e| AuthError::Validation(e.to_string()))?;
        let role = UserRole::from_code(&input.role)
            .ok_or_else(|| AuthError::InvalidRole(input.role.clone()))?;

        let language = input.language.trim();
        let language = if language.is_empty() { "en" } else { language };

        // Uniqueness checks
        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }
        if self.repo.exists_by_username(&username).await? {
            return Err(AuthError::UsernameTaken);
        }

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        // Create and persist
        let user = User::new(email, username, password_hash, role, language.to_string());
        self.repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            role = %user.role,
            "User signed up"
        );

        Ok(SignUpOutput {
            user_id: user.user_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::InMemoryUserRepository;

    fn use_case() -> SignUpUseCase<InMemoryUserRepository> {
        SignUpUseCase::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(AuthConfig::with_random_secret()),
        )
    }

    fn input(email: &str, username: &str, role: &str) -> SignUpInput {
        SignUpInput {
            email: email.to_string(),
            password: "p1".to_string(),
            username: username.to_string(),
            language: "en".to_string(),
            role: role.to_string(),
        }
    }

    #[tokio::test]
    async fn test_sign_up_success() {
        let use_case = use_case();

        let first = use_case.execute(input("a@x.com", "alice", "USER")).await.unwrap();
        let second = use_case.execute(input("b@x.com", "bob", "STAFF")).await.unwrap();

        // Distinct principal ids
        assert_ne!(first.user_id, second.user_id);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_regardless_of_username() {
        let use_case = use_case();

        use_case.execute(input("a@x.com", "alice", "USER")).await.unwrap();

        let result = use_case.execute(input("a@x.com", "alice2", "USER")).await;
        assert!(matches!(result, Err(AuthError::EmailTaken)));
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let use_case = use_case();

        use_case.execute(input("a@x.com", "alice", "USER")).await.unwrap();

        let result = use_case.execute(input("b@x.com", "alice", "USER")).await;
        assert!(matches!(result, Err(AuthError::UsernameTaken)));

        // Uniqueness is canonical: case variants collide
        let result = use_case.execute(input("c@x.com", "ALICE", "USER")).await;
        assert!(matches!(result, Err(AuthError::UsernameTaken)));
    }

    #[tokio::test]
    async fn test_unknown_role_rejected() {
        let use_case = use_case();

        let result = use_case.execute(input("a@x.com", "alice", "OVERLORD")).await;
        assert!(matches!(result, Err(AuthError::InvalidRole(_))));
    }

    #[tokio::test]
    async fn test_invalid_email_rejected() {
        let use_case = use_case();

        let result = use_case.execute(input("not-an-email", "alice", "USER")).await;
        assert!(matches!(result, Err(AuthError::Validation(_))));
    }

    #[tokio::test]
    async fn test_password_is_stored_hashed() {
        let use_case = use_case();
        let output = use_case.execute(input("a@x.com", "alice", "USER")).await.unwrap();

        let stored = use_case
            .repo
            .find_by_id(&output.user_id)
            .await
            .unwrap()
            .unwrap();

        assert_ne!(stored.password_hash.as_phc_string(), "p1");
        assert!(stored.password_hash.as_phc_string().starts_with("$argon2"));
    }
}
