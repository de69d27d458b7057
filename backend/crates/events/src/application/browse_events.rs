//! Browse Events Use Case
//!
//! Read-only queries: public listing, detail lookup, and the admin's
//! pending-moderation view.

use std::sync::Arc;

use crate::domain::entity::event::Event;
use crate::domain::repository::EventRepository;
use crate::domain::value_object::event_id::EventId;
use crate::error::{EventError, EventResult};

/// Browse events use case
pub struct BrowseEventsUseCase<R>
where
    R: EventRepository,
{
    events: Arc<R>,
}

impl<R> BrowseEventsUseCase<R>
where
    R: EventRepository,
{
    pub fn new(events: Arc<R>) -> Self {
        Self { events }
    }

    /// All events, newest first
    pub async fn list(&self) -> EventResult<Vec<Event>> {
        self.events.list_all().await
    }

    /// A single event by id
    pub async fn get(&self, event_id: &EventId) -> EventResult<Event> {
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or(EventError::EventNotFound)
    }

    /// Events awaiting admin approval
    pub async fn pending(&self) -> EventResult<Vec<Event>> {
        self.events.list_pending().await
    }
}
