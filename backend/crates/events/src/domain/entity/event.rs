//! Event Entity
//!
//! A campus announcement pinned to a map location. Ownership is recorded
//! once at creation from the authenticated principal and never changes.

use auth::Principal;
use auth::UserId;
use chrono::{DateTime, Utc};

use crate::domain::value_object::event_id::EventId;

/// Fields supplied by the client when creating or updating an event
#[derive(Debug, Clone)]
pub struct EventDetails {
    pub title: String,
    pub description: String,
    pub lat: f64,
    pub lon: f64,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

/// Event entity
///
/// # Invariants
/// - `creator_id`/`creator_name` are bound from the request principal at
///   creation, never from client input, and never updated afterwards.
/// - `creator_id` is `None` only for legacy rows; ownership checks fail
///   closed on it.
#[derive(Debug, Clone)]
pub struct Event {
    pub event_id: EventId,
    pub title: String,
    pub description: String,
    pub lat: f64,
    pub lon: f64,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    /// Public URL of the uploaded image, if any
    pub image_url: Option<String>,
    /// Moderation flag: false until approved by an admin
    pub approved: bool,
    /// Owner identifier (authoritative for ownership checks)
    pub creator_id: Option<UserId>,
    /// Owner display name (denormalized for listings)
    pub creator_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Create a new event owned by the given principal
    pub fn new(details: EventDetails, creator: &Principal) -> Self {
        let now = Utc::now();

        Self {
            event_id: EventId::new(),
            title: details.title,
            description: details.description,
            lat: details.lat,
            lon: details.lon,
            starts_at: details.starts_at,
            ends_at: details.ends_at,
            image_url: None,
            approved: false,
            creator_id: Some(creator.user_id),
            creator_name: creator.username.original().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Ownership gate: may this principal mutate or delete the event?
    ///
    /// True iff the principal is the recorded creator or an administrator.
    /// Legacy rows without a recorded creator deny everyone but admins.
    pub fn editable_by(&self, principal: &Principal) -> bool {
        if principal.role.is_admin() {
            return true;
        }

        match self.creator_id {
            Some(creator_id) => creator_id == principal.user_id,
            None => false,
        }
    }

    /// Apply a client-supplied update (ownership already checked)
    pub fn apply_update(&mut self, details: EventDetails) {
        self.title = details.title;
        self.description = details.description;
        self.lat = details.lat;
        self.lon = details.lon;
        if details.starts_at.is_some() {
            self.starts_at = details.starts_at;
        }
        if details.ends_at.is_some() {
            self.ends_at = details.ends_at;
        }
        self.updated_at = Utc::now();
    }

    /// Attach the uploaded image URL
    pub fn set_image_url(&mut self, url: String) {
        self.image_url = Some(url);
        self.updated_at = Utc::now();
    }

    /// Admin moderation: mark the event approved
    pub fn approve(&mut self) {
        self.approved = true;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::{UserRole, Username};

    fn principal(role: UserRole) -> Principal {
        Principal {
            user_id: UserId::new(),
            username: Username::new("alice").unwrap(),
            role,
        }
    }

    fn details() -> EventDetails {
        EventDetails {
            title: "Spring festival".to_string(),
            description: "Main square".to_string(),
            lat: 36.628,
            lon: 127.457,
            starts_at: None,
            ends_at: None,
        }
    }

    #[test]
    fn test_new_binds_creator_from_principal() {
        let creator = principal(UserRole::Staff);
        let event = Event::new(details(), &creator);

        assert_eq!(event.creator_id, Some(creator.user_id));
        assert_eq!(event.creator_name, "alice");
        assert!(!event.approved);
    }

    #[test]
    fn test_owner_may_edit() {
        let creator = principal(UserRole::Staff);
        let event = Event::new(details(), &creator);

        assert!(event.editable_by(&creator));
    }

    #[test]
    fn test_other_user_may_not_edit() {
        let creator = principal(UserRole::Staff);
        let event = Event::new(details(), &creator);

        let other = principal(UserRole::Staff);
        assert!(!event.editable_by(&other));
    }

    #[test]
    fn test_admin_may_always_edit() {
        let creator = principal(UserRole::Staff);
        let event = Event::new(details(), &creator);

        let admin = principal(UserRole::Admin);
        assert!(event.editable_by(&admin));
    }

    #[test]
    fn test_legacy_event_without_creator_fails_closed() {
        let creator = principal(UserRole::Staff);
        let mut event = Event::new(details(), &creator);
        event.creator_id = None;

        // Not even the original creator matches a null owner
        assert!(!event.editable_by(&creator));
        // Admins still may
        assert!(event.editable_by(&principal(UserRole::Admin)));
    }

    #[test]
    fn test_apply_update_keeps_dates_when_absent() {
        let creator = principal(UserRole::Staff);
        let starts = Some(Utc::now());
        let mut event = Event::new(
            EventDetails {
                starts_at: starts,
                ..details()
            },
            &creator,
        );

        event.apply_update(details());
        assert_eq!(event.starts_at, starts);

        let new_start = Some(Utc::now());
        event.apply_update(EventDetails {
            starts_at: new_start,
            ..details()
        });
        assert_eq!(event.starts_at, new_start);
    }

    #[test]
    fn test_approve() {
        let creator = principal(UserRole::Staff);
        let mut event = Event::new(details(), &creator);

        event.approve();
        assert!(event.approved);
    }
}
