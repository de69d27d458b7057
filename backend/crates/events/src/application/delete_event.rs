//! Delete Event Use Case
//!
//! Same load-then-gate sequence as updates. Dependent comments cascade
//! at the store level; the uploaded image file is intentionally left on
//! disk (documented gap).

use std::sync::Arc;

use auth::Principal;

use crate::domain::repository::EventRepository;
use crate::domain::value_object::event_id::EventId;
use crate::error::{EventError, EventResult};

/// Delete event use case
pub struct DeleteEventUseCase<R>
where
    R: EventRepository,
{
    events: Arc<R>,
}

impl<R> DeleteEventUseCase<R>
where
    R: EventRepository,
{
    pub fn new(events: Arc<R>) -> Self {
        Self { events }
    }

    pub async fn execute(&self, event_id: &EventId, requester: &Principal) -> EventResult<()> {
        let event = self
            .events
            .find_by_id(event_id)
            .await?
            .ok_or(EventError::EventNotFound)?;

        if !event.editable_by(requester) {
            return Err(EventError::Forbidden(
                "Only the creator or an administrator may delete this event".to_string(),
            ));
        }

        self.events.delete(event_id).await?;

        tracing::info!(event_id = %event_id, "Event deleted");

        Ok(())
    }
}
