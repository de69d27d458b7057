//! Approve Event Use Case
//!
//! Admin moderation: flip an event's approved flag. Role gating happens
//! at the route guard.

use std::sync::Arc;

use crate::domain::repository::EventRepository;
use crate::domain::value_object::event_id::EventId;
use crate::error::{EventError, EventResult};

/// Approve event use case
pub struct ApproveEventUseCase<R>
where
    R: EventRepository,
{
    events: Arc<R>,
}

impl<R> ApproveEventUseCase<R>
where
    R: EventRepository,
{
    pub fn new(events: Arc<R>) -> Self {
        Self { events }
    }

    pub async fn execute(&self, event_id: &EventId) -> EventResult<()> {
        let mut event = self
            .events
            .find_by_id(event_id)
            .await?
            .ok_or(EventError::EventNotFound)?;

        event.approve();
        self.events.update(&event).await?;

        tracing::info!(event_id = %event.event_id, "Event approved");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{InMemoryEventRepository, seeded_event, staff_principal};

    #[tokio::test]
    async fn test_approve() {
        let repo = Arc::new(InMemoryEventRepository::new());
        let event_id = seeded_event(&repo, &staff_principal()).await;

        ApproveEventUseCase::new(repo.clone())
            .execute(&event_id)
            .await
            .unwrap();

        let stored = repo.find_by_id(&event_id).await.unwrap().unwrap();
        assert!(stored.approved);

        // No longer pending
        assert!(repo.list_pending().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_approve_missing_event() {
        let repo = Arc::new(InMemoryEventRepository::new());

        let result = ApproveEventUseCase::new(repo).execute(&EventId::new()).await;
        assert!(matches!(result, Err(EventError::EventNotFound)));
    }
}
