//! Presentation Layer
//!
//! HTTP handlers, DTOs, routers, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{
    AuthContext, AuthGateState, authenticate, require_admin, require_auth, require_staff,
};
pub use router::{admin_user_router, admin_user_router_generic, user_router, user_router_generic};
