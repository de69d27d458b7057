//! Comment Thread Use Cases
//!
//! Listing, adding and deleting comments under an event. A comment is
//! independently owned: its own author or an administrator may delete
//! it, regardless of who owns the parent event.

use std::sync::Arc;

use auth::Principal;

use crate::domain::entity::comment::{COMMENT_MAX_LENGTH, Comment};
use crate::domain::repository::{CommentRepository, EventRepository};
use crate::domain::value_object::{comment_id::CommentId, event_id::EventId};
use crate::error::{EventError, EventResult};

/// Comment thread use case
pub struct CommentThreadUseCase<E, C>
where
    E: EventRepository,
    C: CommentRepository,
{
    events: Arc<E>,
    comments: Arc<C>,
}

impl<E, C> CommentThreadUseCase<E, C>
where
    E: EventRepository,
    C: CommentRepository,
{
    pub fn new(events: Arc<E>, comments: Arc<C>) -> Self {
        Self { events, comments }
    }

    /// Comments under an event, oldest first
    pub async fn list(&self, event_id: &EventId) -> EventResult<Vec<Comment>> {
        self.comments.list_by_event(event_id).await
    }

    /// Add a comment authored by the principal
    pub async fn add(
        &self,
        event_id: &EventId,
        author: &Principal,
        content: String,
    ) -> EventResult<Comment> {
        let content = content.trim().to_string();
        if content.is_empty() {
            return Err(EventError::Validation(
                "Comment content cannot be empty".to_string(),
            ));
        }
        if content.chars().count() > COMMENT_MAX_LENGTH {
            return Err(EventError::Validation(format!(
                "Comment must be at most {} characters",
                COMMENT_MAX_LENGTH
            )));
        }

        // The parent event must exist
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or(EventError::EventNotFound)?;

        let comment = Comment::new(*event_id, author, content);
        self.comments.create(&comment).await?;

        tracing::info!(
            comment_id = %comment.comment_id,
            event_id = %event_id,
            "Comment added"
        );

        Ok(comment)
    }

    /// Delete a comment (author or admin only)
    pub async fn delete(&self, comment_id: &CommentId, requester: &Principal) -> EventResult<()> {
        let comment = self
            .comments
            .find_by_id(comment_id)
            .await?
            .ok_or(EventError::CommentNotFound)?;

        if !comment.deletable_by(requester) {
            return Err(EventError::Forbidden(
                "Only the author or an administrator may delete this comment".to_string(),
            ));
        }

        self.comments.delete(comment_id).await?;

        tracing::info!(comment_id = %comment_id, "Comment deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{
        InMemoryCommentRepository, InMemoryEventRepository, admin_principal, seeded_event,
        staff_principal, user_principal,
    };

    fn thread(
        events: Arc<InMemoryEventRepository>,
    ) -> CommentThreadUseCase<InMemoryEventRepository, InMemoryCommentRepository> {
        CommentThreadUseCase::new(events, Arc::new(InMemoryCommentRepository::new()))
    }

    #[tokio::test]
    async fn test_add_and_list_in_order() {
        let events = Arc::new(InMemoryEventRepository::new());
        let event_id = seeded_event(&events, &staff_principal()).await;
        let thread = thread(events);

        let author = user_principal();
        thread.add(&event_id, &author, "first".to_string()).await.unwrap();
        thread.add(&event_id, &author, "second".to_string()).await.unwrap();

        let comments = thread.list(&event_id).await.unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].content, "first");
        assert_eq!(comments[1].content, "second");
    }

    #[tokio::test]
    async fn test_add_to_missing_event() {
        let events = Arc::new(InMemoryEventRepository::new());
        let thread = thread(events);

        let result = thread
            .add(&EventId::new(), &user_principal(), "hello".to_string())
            .await;
        assert!(matches!(result, Err(EventError::EventNotFound)));
    }

    #[tokio::test]
    async fn test_empty_content_rejected() {
        let events = Arc::new(InMemoryEventRepository::new());
        let event_id = seeded_event(&events, &staff_principal()).await;
        let thread = thread(events);

        let result = thread
            .add(&event_id, &user_principal(), "   ".to_string())
            .await;
        assert!(matches!(result, Err(EventError::Validation(_))));
    }

    #[tokio::test]
    async fn test_overlong_content_rejected() {
        let events = Arc::new(InMemoryEventRepository::new());
        let event_id = seeded_event(&events, &staff_principal()).await;
        let thread = thread(events);

        let result = thread
            .add(
                &event_id,
                &user_principal(),
                "a".repeat(COMMENT_MAX_LENGTH + 1),
            )
            .await;
        assert!(matches!(result, Err(EventError::Validation(_))));
    }

    #[tokio::test]
    async fn test_author_deletes_own_comment() {
        let events = Arc::new(InMemoryEventRepository::new());
        let event_id = seeded_event(&events, &staff_principal()).await;
        let thread = thread(events);

        let author = user_principal();
        let comment = thread.add(&event_id, &author, "mine".to_string()).await.unwrap();

        thread.delete(&comment.comment_id, &author).await.unwrap();
        assert!(thread.list(&event_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_other_authenticated_user_forbidden() {
        let events = Arc::new(InMemoryEventRepository::new());
        let event_owner = staff_principal();
        let event_id = seeded_event(&events, &event_owner).await;
        let thread = thread(events);

        let author = user_principal();
        let comment = thread.add(&event_id, &author, "mine".to_string()).await.unwrap();

        // Even the parent event's owner is not the comment's owner
        let result = thread.delete(&comment.comment_id, &event_owner).await;
        assert!(matches!(result, Err(EventError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_admin_deletes_any_comment() {
        let events = Arc::new(InMemoryEventRepository::new());
        let event_id = seeded_event(&events, &staff_principal()).await;
        let thread = thread(events);

        let comment = thread
            .add(&event_id, &user_principal(), "mine".to_string())
            .await
            .unwrap();

        thread
            .delete(&comment.comment_id, &admin_principal())
            .await
            .unwrap();
        assert!(thread.list(&event_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_comment() {
        let events = Arc::new(InMemoryEventRepository::new());
        let thread = thread(events);

        let result = thread.delete(&CommentId::new(), &admin_principal()).await;
        assert!(matches!(result, Err(EventError::CommentNotFound)));
    }
}
