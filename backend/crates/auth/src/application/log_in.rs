//! Log In Use Case
//!
//! Verifies credentials and issues a stateless access token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::token::TokenService;
use crate::domain::value_object::{
    email::Email, user_id::UserId, user_password::RawPassword, user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// Log in input
pub struct LogInInput {
    pub email: String,
    pub password: String,
}

/// Log in output
pub struct LogInOutput {
    /// Signed bearer token
    pub token: String,
    pub user_id: UserId,
    pub username: String,
    pub role: UserRole,
    pub language: String,
}

/// Log in use case
pub struct LogInUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
    tokens: TokenService,
}

impl<R> LogInUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        let tokens = TokenService::new(config.clone());
        Self {
            repo,
            config,
            tokens,
        }
    }

    pub async fn execute(&self, input: LogInInput) -> AuthResult<LogInOutput> {
        // Unknown email and wrong password are indistinguishable to the caller
        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&raw_password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.user_id);

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User logged in"
        );

        Ok(LogInOutput {
            token,
            user_id: user.user_id,
            username: user.username.original().to_string(),
            role: user.role,
            language: user.language,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::sign_up::{SignUpInput, SignUpUseCase};
    use crate::application::testing::InMemoryUserRepository;

    async fn seeded() -> (Arc<InMemoryUserRepository>, Arc<AuthConfig>) {
        let repo = Arc::new(InMemoryUserRepository::new());
        let config = Arc::new(AuthConfig::with_random_secret());

        SignUpUseCase::new(repo.clone(), config.clone())
            .execute(SignUpInput {
                email: "a@x.com".to_string(),
                password: "p1".to_string(),
                username: "alice".to_string(),
                language: "en".to_string(),
                role: "USER".to_string(),
            })
            .await
            .unwrap();

        (repo, config)
    }

    #[tokio::test]
    async fn test_log_in_success_returns_valid_token() {
        let (repo, config) = seeded().await;
        let use_case = LogInUseCase::new(repo, config.clone());

        let output = use_case
            .execute(LogInInput {
                email: "a@x.com".to_string(),
                password: "p1".to_string(),
            })
            .await
            .unwrap();

        assert!(!output.token.is_empty());
        assert_eq!(output.username, "alice");
        assert_eq!(output.role, UserRole::User);

        // The token resolves back to the same subject
        let claims = TokenService::new(config).validate(&output.token).unwrap();
        assert_eq!(claims.subject(), output.user_id);
    }

    #[tokio::test]
    async fn test_wrong_password_rejected() {
        let (repo, config) = seeded().await;
        let use_case = LogInUseCase::new(repo, config);

        let result = use_case
            .execute(LogInInput {
                email: "a@x.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_unknown_email_rejected_with_same_error() {
        let (repo, config) = seeded().await;
        let use_case = LogInUseCase::new(repo, config);

        let result = use_case
            .execute(LogInInput {
                email: "nobody@x.com".to_string(),
                password: "p1".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }
}
