//! Update Event Use Case
//!
//! Loads the event, applies the ownership gate, then persists the
//! changes. The gate runs after the load: ownership is a property of the
//! stored instance, not of the operation.

use std::sync::Arc;

use auth::Principal;

use crate::application::validate_details;
use crate::domain::entity::event::EventDetails;
use crate::domain::repository::EventRepository;
use crate::domain::value_object::event_id::EventId;
use crate::error::{EventError, EventResult};

/// Update event use case
pub struct UpdateEventUseCase<R>
where
    R: EventRepository,
{
    events: Arc<R>,
}

impl<R> UpdateEventUseCase<R>
where
    R: EventRepository,
{
    pub fn new(events: Arc<R>) -> Self {
        Self { events }
    }

    pub async fn execute(
        &self,
        event_id: &EventId,
        details: EventDetails,
        requester: &Principal,
    ) -> EventResult<()> {
        validate_details(&details)?;

        let mut event = self
            .events
            .find_by_id(event_id)
            .await?
            .ok_or(EventError::EventNotFound)?;

        if !event.editable_by(requester) {
            return Err(EventError::Forbidden(
                "Only the creator or an administrator may edit this event".to_string(),
            ));
        }

        event.apply_update(details);
        self.events.update(&event).await?;

        tracing::info!(event_id = %event.event_id, "Event updated");

        Ok(())
    }
}
