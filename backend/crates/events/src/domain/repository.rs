//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{comment::Comment, event::Event};
use crate::domain::value_object::{comment_id::CommentId, event_id::EventId};
use crate::error::EventResult;

/// Event repository trait
#[trait_variant::make(EventRepository: Send)]
pub trait LocalEventRepository {
    /// Create a new event
    async fn create(&self, event: &Event) -> EventResult<()>;

    /// Find event by ID
    async fn find_by_id(&self, event_id: &EventId) -> EventResult<Option<Event>>;

    /// List all events, newest first
    async fn list_all(&self) -> EventResult<Vec<Event>>;

    /// List events awaiting approval, newest first
    async fn list_pending(&self) -> EventResult<Vec<Event>>;

    /// Update event
    async fn update(&self, event: &Event) -> EventResult<()>;

    /// Delete event (dependent comments cascade)
    async fn delete(&self, event_id: &EventId) -> EventResult<()>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// Create a new comment
    async fn create(&self, comment: &Comment) -> EventResult<()>;

    /// Find comment by ID
    async fn find_by_id(&self, comment_id: &CommentId) -> EventResult<Option<Comment>>;

    /// List comments for an event, oldest first
    async fn list_by_event(&self, event_id: &EventId) -> EventResult<Vec<Comment>>;

    /// Delete a comment
    async fn delete(&self, comment_id: &CommentId) -> EventResult<()>;
}
