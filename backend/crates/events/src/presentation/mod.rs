//! Presentation Layer
//!
//! HTTP handlers, DTOs, and routers. Authentication middleware comes
//! from the auth crate.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::EventsAppState;
pub use router::{
    admin_events_router, admin_events_router_generic, comments_router, comments_router_generic,
    events_router, events_router_generic,
};
