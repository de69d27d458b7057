//! In-memory repositories and fixtures for use-case tests

use std::sync::Mutex;

use auth::{Principal, UserId, UserRole, Username};

use crate::domain::entity::comment::Comment;
use crate::domain::entity::event::{Event, EventDetails};
use crate::domain::repository::{CommentRepository, EventRepository};
use crate::domain::value_object::{comment_id::CommentId, event_id::EventId};
use crate::error::EventResult;

pub fn user_principal() -> Principal {
    Principal {
        user_id: UserId::new(),
        username: Username::new("carol").unwrap(),
        role: UserRole::User,
    }
}

pub fn staff_principal() -> Principal {
    Principal {
        user_id: UserId::new(),
        username: Username::new("alice").unwrap(),
        role: UserRole::Staff,
    }
}

pub fn admin_principal() -> Principal {
    Principal {
        user_id: UserId::new(),
        username: Username::new("root-admin").unwrap(),
        role: UserRole::Admin,
    }
}

pub fn sample_details() -> EventDetails {
    EventDetails {
        title: "Spring festival".to_string(),
        description: "Food stalls on the main square".to_string(),
        lat: 36.628,
        lon: 127.457,
        starts_at: None,
        ends_at: None,
    }
}

/// Insert a sample event owned by `owner` and return its id
pub async fn seeded_event(repo: &InMemoryEventRepository, owner: &Principal) -> EventId {
    let event = Event::new(sample_details(), owner);
    let event_id = event.event_id;
    repo.create(&event).await.unwrap();
    event_id
}

/// In-memory `EventRepository` backed by a `Vec`
pub struct InMemoryEventRepository {
    events: Mutex<Vec<Event>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryEventRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EventRepository for InMemoryEventRepository {
    async fn create(&self, event: &Event) -> EventResult<()> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }

    async fn find_by_id(&self, event_id: &EventId) -> EventResult<Option<Event>> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .find(|e| &e.event_id == event_id)
            .cloned())
    }

    async fn list_all(&self) -> EventResult<Vec<Event>> {
        let mut events = self.events.lock().unwrap().clone();
        events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(events)
    }

    async fn list_pending(&self) -> EventResult<Vec<Event>> {
        let mut events: Vec<Event> = self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| !e.approved)
            .cloned()
            .collect();
        events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(events)
    }

    async fn update(&self, event: &Event) -> EventResult<()> {
        let mut events = self.events.lock().unwrap();
        if let Some(existing) = events.iter_mut().find(|e| e.event_id == event.event_id) {
            *existing = event.clone();
        }
        Ok(())
    }

    async fn delete(&self, event_id: &EventId) -> EventResult<()> {
        self.events
            .lock()
            .unwrap()
            .retain(|e| &e.event_id != event_id);
        Ok(())
    }
}

/// In-memory `CommentRepository` backed by a `Vec`
pub struct InMemoryCommentRepository {
    comments: Mutex<Vec<Comment>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self {
            comments: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryCommentRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentRepository for InMemoryCommentRepository {
    async fn create(&self, comment: &Comment) -> EventResult<()> {
        self.comments.lock().unwrap().push(comment.clone());
        Ok(())
    }

    async fn find_by_id(&self, comment_id: &CommentId) -> EventResult<Option<Comment>> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .find(|c| &c.comment_id == comment_id)
            .cloned())
    }

    async fn list_by_event(&self, event_id: &EventId) -> EventResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| &c.event_id == event_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }

    async fn delete(&self, comment_id: &CommentId) -> EventResult<()> {
        self.comments
            .lock()
            .unwrap()
            .retain(|c| &c.comment_id != comment_id);
        Ok(())
    }
}
