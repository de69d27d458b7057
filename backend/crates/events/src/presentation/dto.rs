//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::{comment::Comment, event::Event};
use crate::error::{EventError, EventResult};

/// Datetime format the map frontend submits (`2026-05-01T18:30`)
const FORM_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parse a client-submitted datetime string
pub(crate) fn parse_form_datetime(s: &str) -> EventResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, FORM_DATETIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| {
            EventError::Validation(format!(
                "Invalid datetime '{}', expected format {}",
                s, FORM_DATETIME_FORMAT
            ))
        })
}

// ============================================================================
// Events
// ============================================================================

/// Event representation in listings and detail responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub lat: f64,
    pub lon: f64,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub image_url: Option<String>,
    pub approved: bool,
    pub creator_id: Option<Uuid>,
    pub creator_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: *event.event_id.as_uuid(),
            title: event.title.clone(),
            description: event.description.clone(),
            lat: event.lat,
            lon: event.lon,
            starts_at: event.starts_at,
            ends_at: event.ends_at,
            image_url: event.image_url.clone(),
            approved: event.approved,
            creator_id: event.creator_id.as_ref().map(|id| *id.as_uuid()),
            creator_name: event.creator_name.clone(),
            created_at: event.created_at,
        }
    }
}

/// Create event response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventResponse {
    pub message: String,
    pub event_id: Uuid,
    pub image_url: Option<String>,
}

/// Update event request (JSON body)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    pub title: String,
    pub description: String,
    pub lat: f64,
    pub lon: f64,
    pub starts_at: Option<String>,
    pub ends_at: Option<String>,
}

/// Update event response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventResponse {
    pub message: String,
    pub event_id: Uuid,
}

// ============================================================================
// Comments
// ============================================================================

/// Add comment request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    pub content: String,
}

/// Comment representation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: Uuid,
    pub content: String,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
    pub is_mine: bool,
}

impl CommentResponse {
    pub fn from_comment(comment: &Comment, is_mine: bool) -> Self {
        Self {
            id: *comment.comment_id.as_uuid(),
            content: comment.content.clone(),
            user_name: comment.author_name.clone(),
            created_at: comment.created_at,
            is_mine,
        }
    }
}

/// Generic success message
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}
