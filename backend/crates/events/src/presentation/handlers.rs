//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Multipart, Path, State};
use std::sync::Arc;
use uuid::Uuid;

use auth::{AuthContext, Principal};

use crate::application::{
    ApproveEventUseCase, BrowseEventsUseCase, CommentThreadUseCase, CreateEventInput,
    CreateEventUseCase, DeleteEventUseCase, UpdateEventUseCase,
};
use crate::domain::entity::event::EventDetails;
use crate::domain::repository::{CommentRepository, EventRepository};
use crate::domain::value_object::{comment_id::CommentId, event_id::EventId};
use crate::error::{EventError, EventResult};
use crate::infra::storage::{ImageStore, ImageUpload};
use crate::presentation::dto::{
    AddCommentRequest, CommentResponse, CreateEventResponse, EventResponse, MessageResponse,
    UpdateEventRequest, UpdateEventResponse, parse_form_datetime,
};

/// Shared state for event handlers
#[derive(Clone)]
pub struct EventsAppState<R>
where
    R: EventRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub images: Arc<ImageStore>,
}

/// The guards guarantee a principal on protected routes; this converts
/// the context anyway, failing closed if the gate never ran.
fn require_principal(ctx: &AuthContext) -> EventResult<&Principal> {
    ctx.principal().ok_or(EventError::Unauthorized)
}

// ============================================================================
// Events: public reads
// ============================================================================

/// GET /api/events
pub async fn list_events<R>(
    State(state): State<EventsAppState<R>>,
) -> EventResult<Json<Vec<EventResponse>>>
where
    R: EventRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = BrowseEventsUseCase::new(state.repo.clone());
    let events = use_case.list().await?;

    Ok(Json(events.iter().map(EventResponse::from).collect()))
}

/// GET /api/events/{id}
pub async fn get_event<R>(
    State(state): State<EventsAppState<R>>,
    Path(event_id): Path<Uuid>,
) -> EventResult<Json<EventResponse>>
where
    R: EventRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = BrowseEventsUseCase::new(state.repo.clone());
    let event = use_case.get(&EventId::from_uuid(event_id)).await?;

    Ok(Json(EventResponse::from(&event)))
}

// ============================================================================
// Events: mutations
// ============================================================================

/// POST /api/events (multipart form, Staff or Admin)
pub async fn create_event<R>(
    State(state): State<EventsAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
    multipart: Multipart,
) -> EventResult<Json<CreateEventResponse>>
where
    R: EventRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let principal = require_principal(&ctx)?.clone();
    let (details, image) = read_event_form(multipart).await?;

    let use_case = CreateEventUseCase::new(state.repo.clone(), state.images.clone());
    let output = use_case
        .execute(CreateEventInput { details, image }, &principal)
        .await?;

    Ok(Json(CreateEventResponse {
        message: "Event created".to_string(),
        event_id: *output.event_id.as_uuid(),
        image_url: output.image_url,
    }))
}

/// PUT /api/events/{id} (owner or Admin)
pub async fn update_event<R>(
    State(state): State<EventsAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
    Path(event_id): Path<Uuid>,
    Json(req): Json<UpdateEventRequest>,
) -> EventResult<Json<UpdateEventResponse>>
where
    R: EventRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let principal = require_principal(&ctx)?;

    let details = EventDetails {
        title: req.title,
        description: req.description,
        lat: req.lat,
        lon: req.lon,
        starts_at: req.starts_at.as_deref().map(parse_form_datetime).transpose()?,
        ends_at: req.ends_at.as_deref().map(parse_form_datetime).transpose()?,
    };

    let use_case = UpdateEventUseCase::new(state.repo.clone());
    use_case
        .execute(&EventId::from_uuid(event_id), details, principal)
        .await?;

    Ok(Json(UpdateEventResponse {
        message: "Event updated".to_string(),
        event_id,
    }))
}

/// DELETE /api/events/{id} (owner or Admin)
pub async fn delete_event<R>(
    State(state): State<EventsAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
    Path(event_id): Path<Uuid>,
) -> EventResult<Json<MessageResponse>>
where
    R: EventRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let principal = require_principal(&ctx)?;

    let use_case = DeleteEventUseCase::new(state.repo.clone());
    use_case
        .execute(&EventId::from_uuid(event_id), principal)
        .await?;

    Ok(Json(MessageResponse {
        message: "Event deleted".to_string(),
    }))
}

// ============================================================================
// Comments
// ============================================================================

/// GET /api/events/{id}/comments
pub async fn list_comments<R>(
    State(state): State<EventsAppState<R>>,
    ctx: Option<Extension<AuthContext>>,
    Path(event_id): Path<Uuid>,
) -> EventResult<Json<Vec<CommentResponse>>>
where
    R: EventRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let viewer = ctx.as_ref().and_then(|Extension(ctx)| ctx.principal());

    let use_case = CommentThreadUseCase::new(state.repo.clone(), state.repo.clone());
    let comments = use_case.list(&EventId::from_uuid(event_id)).await?;

    Ok(Json(
        comments
            .iter()
            .map(|c| CommentResponse::from_comment(c, c.authored_by(viewer)))
            .collect(),
    ))
}

/// POST /api/events/{id}/comments (authenticated)
pub async fn add_comment<R>(
    State(state): State<EventsAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
    Path(event_id): Path<Uuid>,
    Json(req): Json<AddCommentRequest>,
) -> EventResult<Json<CommentResponse>>
where
    R: EventRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let principal = require_principal(&ctx)?;

    let use_case = CommentThreadUseCase::new(state.repo.clone(), state.repo.clone());
    let comment = use_case
        .add(&EventId::from_uuid(event_id), principal, req.content)
        .await?;

    Ok(Json(CommentResponse::from_comment(&comment, true)))
}

/// DELETE /api/comments/{id} (comment author or Admin)
pub async fn delete_comment<R>(
    State(state): State<EventsAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
    Path(comment_id): Path<Uuid>,
) -> EventResult<Json<MessageResponse>>
where
    R: EventRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let principal = require_principal(&ctx)?;

    let use_case = CommentThreadUseCase::new(state.repo.clone(), state.repo.clone());
    use_case
        .delete(&CommentId::from_uuid(comment_id), principal)
        .await?;

    Ok(Json(MessageResponse {
        message: "Comment deleted".to_string(),
    }))
}

// ============================================================================
// Admin: moderation
// ============================================================================

/// GET /api/admin/events/pending
pub async fn pending_events<R>(
    State(state): State<EventsAppState<R>>,
) -> EventResult<Json<Vec<EventResponse>>>
where
    R: EventRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = BrowseEventsUseCase::new(state.repo.clone());
    let events = use_case.pending().await?;

    Ok(Json(events.iter().map(EventResponse::from).collect()))
}

/// PUT /api/admin/events/{id}/approve
pub async fn approve_event<R>(
    State(state): State<EventsAppState<R>>,
    Path(event_id): Path<Uuid>,
) -> EventResult<Json<MessageResponse>>
where
    R: EventRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = ApproveEventUseCase::new(state.repo.clone());
    use_case.execute(&EventId::from_uuid(event_id)).await?;

    Ok(Json(MessageResponse {
        message: "Event approved".to_string(),
    }))
}

// ============================================================================
// Multipart form parsing
// ============================================================================

/// Read the event creation form: title, description, lat, lon,
/// startsAt?, endsAt?, image?
async fn read_event_form(
    mut multipart: Multipart,
) -> EventResult<(EventDetails, Option<ImageUpload>)> {
    let mut title = None;
    let mut description = None;
    let mut lat = None;
    let mut lon = None;
    let mut starts_at = None;
    let mut ends_at = None;
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| EventError::Validation(format!("Malformed multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "title" => title = Some(read_text(field, "title").await?),
            "description" => description = Some(read_text(field, "description").await?),
            "lat" => lat = Some(parse_f64(&read_text(field, "lat").await?, "lat")?),
            "lon" => lon = Some(parse_f64(&read_text(field, "lon").await?, "lon")?),
            "startsAt" => {
                let value = read_text(field, "startsAt").await?;
                if !value.is_empty() {
                    starts_at = Some(parse_form_datetime(&value)?);
                }
            }
            "endsAt" => {
                let value = read_text(field, "endsAt").await?;
                if !value.is_empty() {
                    ends_at = Some(parse_form_datetime(&value)?);
                }
            }
            "image" => {
                let filename = field.file_name().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| EventError::Validation(format!("Failed to read image: {}", e)))?
                    .to_vec();
                if !bytes.is_empty() {
                    image = Some(ImageUpload { filename, bytes });
                }
            }
            // Unknown fields are ignored
            _ => {}
        }
    }

    let details = EventDetails {
        title: title.ok_or_else(|| missing("title"))?,
        description: description.ok_or_else(|| missing("description"))?,
        lat: lat.ok_or_else(|| missing("lat"))?,
        lon: lon.ok_or_else(|| missing("lon"))?,
        starts_at,
        ends_at,
    };

    Ok((details, image))
}

async fn read_text(field: axum::extract::multipart::Field<'_>, name: &str) -> EventResult<String> {
    field
        .text()
        .await
        .map_err(|e| EventError::Validation(format!("Failed to read field '{}': {}", name, e)))
}

fn parse_f64(value: &str, name: &str) -> EventResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| EventError::Validation(format!("Field '{}' must be a number", name)))
}

fn missing(name: &str) -> EventError {
    EventError::Validation(format!("Missing required field '{}'", name))
}
