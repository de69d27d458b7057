//! PostgreSQL Repository Implementations

use auth::UserId;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{comment::Comment, event::Event};
use crate::domain::repository::{CommentRepository, EventRepository};
use crate::domain::value_object::{comment_id::CommentId, event_id::EventId};
use crate::error::EventResult;

/// PostgreSQL-backed event/comment repository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Event Repository Implementation
// ============================================================================

impl EventRepository for PgEventRepository {
    async fn create(&self, event: &Event) -> EventResult<()> {
        sqlx::query(
            r#"
            INSERT INTO events (
                event_id,
                title,
                description,
                lat,
                lon,
                starts_at,
                ends_at,
                image_url,
                approved,
                creator_id,
                creator_name,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(event.event_id.as_uuid())
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.lat)
        .bind(event.lon)
        .bind(event.starts_at)
        .bind(event.ends_at)
        .bind(&event.image_url)
        .bind(event.approved)
        .bind(event.creator_id.as_ref().map(|id| *id.as_uuid()))
        .bind(&event.creator_name)
        .bind(event.created_at)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, event_id: &EventId) -> EventResult<Option<Event>> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT
                event_id, title, description, lat, lon,
                starts_at, ends_at, image_url, approved,
                creator_id, creator_name, created_at, updated_at
            FROM events
            WHERE event_id = $1
            "#,
        )
        .bind(event_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_event()))
    }

    async fn list_all(&self) -> EventResult<Vec<Event>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT
                event_id, title, description, lat, lon,
                starts_at, ends_at, image_url, approved,
                creator_id, creator_name, created_at, updated_at
            FROM events
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_event()).collect())
    }

    async fn list_pending(&self) -> EventResult<Vec<Event>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT
                event_id, title, description, lat, lon,
                starts_at, ends_at, image_url, approved,
                creator_id, creator_name, created_at, updated_at
            FROM events
            WHERE approved = FALSE
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_event()).collect())
    }

    async fn update(&self, event: &Event) -> EventResult<()> {
        sqlx::query(
            r#"
            UPDATE events SET
                title = $2,
                description = $3,
                lat = $4,
                lon = $5,
                starts_at = $6,
                ends_at = $7,
                image_url = $8,
                approved = $9,
                updated_at = $10
            WHERE event_id = $1
            "#,
        )
        .bind(event.event_id.as_uuid())
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.lat)
        .bind(event.lon)
        .bind(event.starts_at)
        .bind(event.ends_at)
        .bind(&event.image_url)
        .bind(event.approved)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, event_id: &EventId) -> EventResult<()> {
        // Comments cascade via the event_id foreign key
        sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(event_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgEventRepository {
    async fn create(&self, comment: &Comment) -> EventResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (
                comment_id,
                event_id,
                author_id,
                author_name,
                content,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(comment.comment_id.as_uuid())
        .bind(comment.event_id.as_uuid())
        .bind(comment.author_id.as_ref().map(|id| *id.as_uuid()))
        .bind(&comment.author_name)
        .bind(&comment.content)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, comment_id: &CommentId) -> EventResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT comment_id, event_id, author_id, author_name, content, created_at
            FROM comments
            WHERE comment_id = $1
            "#,
        )
        .bind(comment_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_comment()))
    }

    async fn list_by_event(&self, event_id: &EventId) -> EventResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT comment_id, event_id, author_id, author_name, content, created_at
            FROM comments
            WHERE event_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(event_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_comment()).collect())
    }

    async fn delete(&self, comment_id: &CommentId) -> EventResult<()> {
        sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(comment_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct EventRow {
    event_id: Uuid,
    title: String,
    description: String,
    lat: f64,
    lon: f64,
    starts_at: Option<DateTime<Utc>>,
    ends_at: Option<DateTime<Utc>>,
    image_url: Option<String>,
    approved: bool,
    creator_id: Option<Uuid>,
    creator_name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl EventRow {
    fn into_event(self) -> Event {
        Event {
            event_id: EventId::from_uuid(self.event_id),
            title: self.title,
            description: self.description,
            lat: self.lat,
            lon: self.lon,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            image_url: self.image_url,
            approved: self.approved,
            creator_id: self.creator_id.map(UserId::from_uuid),
            creator_name: self.creator_name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    comment_id: Uuid,
    event_id: Uuid,
    author_id: Option<Uuid>,
    author_name: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            comment_id: CommentId::from_uuid(self.comment_id),
            event_id: EventId::from_uuid(self.event_id),
            author_id: self.author_id.map(UserId::from_uuid),
            author_name: self.author_name,
            content: self.content,
            created_at: self.created_at,
        }
    }
}
