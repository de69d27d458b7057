//! Create Event Use Case
//!
//! Creates a campus event owned by the requesting principal. The route
//! guard has already required the Staff role; the creator identity is
//! bound here from the principal, never from client input.

use std::sync::Arc;

use auth::Principal;

use crate::application::validate_details;
use crate::domain::entity::event::{Event, EventDetails};
use crate::domain::repository::EventRepository;
use crate::domain::value_object::event_id::EventId;
use crate::error::EventResult;
use crate::infra::storage::{ImageStore, ImageUpload};

/// Create event input
pub struct CreateEventInput {
    pub details: EventDetails,
    pub image: Option<ImageUpload>,
}

/// Create event output
pub struct CreateEventOutput {
    pub event_id: EventId,
    pub image_url: Option<String>,
}

/// Create event use case
pub struct CreateEventUseCase<R>
where
    R: EventRepository,
{
    events: Arc<R>,
    images: Arc<ImageStore>,
}

impl<R> CreateEventUseCase<R>
where
    R: EventRepository,
{
    pub fn new(events: Arc<R>, images: Arc<ImageStore>) -> Self {
        Self { events, images }
    }

    pub async fn execute(
        &self,
        input: CreateEventInput,
        creator: &Principal,
    ) -> EventResult<CreateEventOutput> {
        validate_details(&input.details)?;

        let mut event = Event::new(input.details, creator);

        // Image is written before the insert; a failure in between leaves
        // an orphaned file (accepted gap, not silently compensated).
        if let Some(image) = &input.image {
            if !image.bytes.is_empty() {
                let url = self.images.save(image).await?;
                event.set_image_url(url);
            }
        }

        self.events.create(&event).await?;

        tracing::info!(
            event_id = %event.event_id,
            creator_id = ?event.creator_id,
            title = %event.title,
            "Event created"
        );

        Ok(CreateEventOutput {
            event_id: event.event_id,
            image_url: event.image_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::EventsConfig;
    use crate::application::testing::{InMemoryEventRepository, sample_details, staff_principal};
    use crate::error::EventError;

    fn use_case() -> (Arc<InMemoryEventRepository>, CreateEventUseCase<InMemoryEventRepository>) {
        let repo = Arc::new(InMemoryEventRepository::new());
        let images = Arc::new(ImageStore::new(&EventsConfig::with_upload_dir(
            std::env::temp_dir().join(format!("uploads-{}", uuid::Uuid::new_v4())),
        )));
        (repo.clone(), CreateEventUseCase::new(repo, images))
    }

    #[tokio::test]
    async fn test_create_binds_creator() {
        let (repo, use_case) = use_case();
        let creator = staff_principal();

        let output = use_case
            .execute(
                CreateEventInput {
                    details: sample_details(),
                    image: None,
                },
                &creator,
            )
            .await
            .unwrap();

        let stored = repo.find_by_id(&output.event_id).await.unwrap().unwrap();
        assert_eq!(stored.creator_id, Some(creator.user_id));
        assert!(!stored.approved);
        assert!(output.image_url.is_none());
    }

    #[tokio::test]
    async fn test_create_with_image_sets_url() {
        let (repo, use_case) = use_case();

        let output = use_case
            .execute(
                CreateEventInput {
                    details: sample_details(),
                    image: Some(ImageUpload {
                        filename: Some("poster.png".to_string()),
                        bytes: vec![1, 2, 3],
                    }),
                },
                &staff_principal(),
            )
            .await
            .unwrap();

        assert!(output.image_url.as_deref().unwrap().starts_with("/uploads/"));
        let stored = repo.find_by_id(&output.event_id).await.unwrap().unwrap();
        assert_eq!(stored.image_url, output.image_url);
    }

    #[tokio::test]
    async fn test_empty_title_rejected() {
        let (_, use_case) = use_case();

        let mut details = sample_details();
        details.title = "   ".to_string();

        let result = use_case
            .execute(
                CreateEventInput {
                    details,
                    image: None,
                },
                &staff_principal(),
            )
            .await;

        assert!(matches!(result, Err(EventError::Validation(_))));
    }

    #[tokio::test]
    async fn test_out_of_range_coordinates_rejected() {
        let (_, use_case) = use_case();

        let mut details = sample_details();
        details.lat = 123.0;

        let result = use_case
            .execute(
                CreateEventInput {
                    details,
                    image: None,
                },
                &staff_principal(),
            )
            .await;

        assert!(matches!(result, Err(EventError::Validation(_))));
    }
}
