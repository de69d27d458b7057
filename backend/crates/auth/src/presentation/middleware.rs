//! Auth Middleware
//!
//! The authentication gate and the route guards.
//!
//! The gate runs once per request, before routing-specific logic: it
//! resolves the bearer token (if any) into a request-scoped principal and
//! always continues the pipeline - rejection is deferred to the guards so
//! that public endpoints keep working with a missing, stale or malformed
//! token.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::authenticate::AuthenticateUseCase;
use crate::application::config::AuthConfig;
use crate::domain::principal::{Access, Principal};
use crate::domain::repository::UserRepository;

/// Gate state
#[derive(Clone)]
pub struct AuthGateState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Request-scoped authentication context
///
/// Inserted by [`authenticate`] for every request; `principal` is `None`
/// for anonymous requests.
#[derive(Clone)]
pub struct AuthContext {
    pub principal: Option<Principal>,
}

impl AuthContext {
    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }
}

/// Authentication gate
///
/// Never short-circuits: any token failure leaves the request anonymous.
pub async fn authenticate<R>(
    State(state): State<AuthGateState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = platform::bearer::extract_bearer(req.headers()).map(|t| t.to_string());

    let principal = match token {
        Some(token) => {
            let use_case = AuthenticateUseCase::new(state.repo.clone(), state.config.clone());
            use_case.execute(&token).await
        }
        None => None,
    };

    req.extensions_mut().insert(AuthContext { principal });

    next.run(req).await
}

/// Guard requiring any authenticated principal
pub async fn require_auth(req: Request<Body>, next: Next) -> Result<Response, Response> {
    guard(Access::Authenticated, req, next).await
}

/// Guard requiring Staff or Admin
pub async fn require_staff(req: Request<Body>, next: Next) -> Result<Response, Response> {
    guard(Access::Staff, req, next).await
}

/// Guard requiring Admin
pub async fn require_admin(req: Request<Body>, next: Next) -> Result<Response, Response> {
    guard(Access::Admin, req, next).await
}

async fn guard(access: Access, req: Request<Body>, next: Next) -> Result<Response, Response> {
    let principal = req
        .extensions()
        .get::<AuthContext>()
        .and_then(|ctx| ctx.principal.as_ref());

    if let Err(e) = access.check(principal) {
        tracing::debug!(rule = ?access, error = %e, "Request rejected by access rule");
        return Err(e.into_response());
    }

    Ok(next.run(req).await)
}
