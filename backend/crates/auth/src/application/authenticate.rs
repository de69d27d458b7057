//! Authenticate Use Case
//!
//! Resolves a bearer token to a request principal. Every failure mode
//! (bad token, expired token, unknown subject, store error) collapses to
//! "anonymous" - the specific cause is only logged. Rejection is the
//! authorization rules' job, not this resolver's.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::principal::Principal;
use crate::domain::repository::UserRepository;
use crate::domain::token::TokenService;

/// Authenticate use case
pub struct AuthenticateUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: TokenService,
}

impl<R> AuthenticateUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        let tokens = TokenService::new(config);
        Self { repo, tokens }
    }

    /// Resolve a raw bearer token to a principal, or `None`
    pub async fn execute(&self, token: &str) -> Option<Principal> {
        let claims = match self.tokens.validate(token) {
            Ok(claims) => claims,
            Err(cause) => {
                tracing::debug!(error = %cause, "Rejected bearer token");
                return None;
            }
        };

        let user = match self.repo.find_by_id(&claims.subject()).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::debug!(subject = %claims.sub, "Token subject no longer exists");
                return None;
            }
            Err(e) => {
                tracing::error!(error = %e, "Principal lookup failed");
                return None;
            }
        };

        Some(Principal::from(&user))
    }
}
