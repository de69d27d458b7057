//! Events Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities (Event, Comment), ownership rules, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementation, image file storage
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Features
//! - Campus events with geolocation, schedule and an optional image
//! - Comment threads under events
//! - Ownership gating: only the creator or an admin mutates an event;
//!   only the author or an admin deletes a comment
//! - Admin moderation queue (pending listing, approval)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::EventsConfig;
pub use domain::entity::{comment::Comment, event::Event};
pub use error::{EventError, EventResult};
pub use infra::postgres::PgEventRepository;
pub use infra::storage::{ImageStore, ImageUpload};
pub use presentation::router::{admin_events_router, comments_router, events_router};

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod store {
    pub use crate::infra::postgres::PgEventRepository as EventStore;
}
