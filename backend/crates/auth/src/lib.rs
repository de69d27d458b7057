//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, token service, access rules
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - User signup/login with email + password
//! - Stateless HMAC-SHA256 signed access tokens (24h TTL, no server-side
//!   session store, no revocation)
//! - Per-request authentication gate resolving tokens to principals
//! - Declarative role gating (User, Staff, Admin) at route boundaries
//! - Admin user management (listing, role updates)
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Token subject is the user's immutable UUID
//! - Invalid tokens degrade to anonymous; rejection happens at the guards

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::principal::{Access, Principal};
pub use domain::token::{AccessClaims, TokenError, TokenService};
pub use domain::value_object::{user_id::UserId, user_role::UserRole, username::Username};
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{AuthContext, AuthGateState};
pub use presentation::router::{admin_user_router, user_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod middleware {
    pub use crate::presentation::middleware::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgAuthRepository as UserStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
