//! Application Layer
//!
//! Use cases and application services.

pub mod approve_event;
pub mod browse_events;
pub mod comments;
pub mod config;
pub mod create_event;
pub mod delete_event;
pub mod update_event;

#[cfg(test)]
pub(crate) mod testing;

use crate::domain::entity::event::EventDetails;
use crate::error::{EventError, EventResult};

// Re-exports
pub use approve_event::ApproveEventUseCase;
pub use browse_events::BrowseEventsUseCase;
pub use comments::CommentThreadUseCase;
pub use config::EventsConfig;
pub use create_event::{CreateEventInput, CreateEventOutput, CreateEventUseCase};
pub use delete_event::DeleteEventUseCase;
pub use update_event::UpdateEventUseCase;

/// Maximum event title length in characters
pub const TITLE_MAX_LENGTH: usize = 200;

/// Validate client-supplied event fields
///
/// Shared by the create and update paths.
pub(crate) fn validate_details(details: &EventDetails) -> EventResult<()> {
    if details.title.trim().is_empty() {
        return Err(EventError::Validation("Title cannot be empty".to_string()));
    }
    if details.title.chars().count() > TITLE_MAX_LENGTH {
        return Err(EventError::Validation(format!(
            "Title must be at most {} characters",
            TITLE_MAX_LENGTH
        )));
    }
    if !(-90.0..=90.0).contains(&details.lat) {
        return Err(EventError::Validation(
            "Latitude must be between -90 and 90".to_string(),
        ));
    }
    if !(-180.0..=180.0).contains(&details.lon) {
        return Err(EventError::Validation(
            "Longitude must be between -180 and 180".to_string(),
        ));
    }

    Ok(())
}
