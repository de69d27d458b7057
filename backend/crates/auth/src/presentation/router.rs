//! Auth Routers

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_admin;

/// Create the public user router (signup/login) with PostgreSQL repository
pub fn user_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    user_router_generic(repo, config)
}

/// Create a generic user router for any repository implementation
pub fn user_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/login", post(handlers::log_in::<R>))
        .with_state(state)
}

/// Create the admin user-management router (Admin role required)
pub fn admin_user_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    admin_user_router_generic(repo, config)
}

/// Generic admin user-management router
pub fn admin_user_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/users", get(handlers::list_users::<R>))
        .route("/users/{user_id}/role", put(handlers::update_user_role::<R>))
        .route_layer(middleware::from_fn(require_admin))
        .with_state(state)
}
