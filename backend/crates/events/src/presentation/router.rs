//! Event Routers

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use auth::middleware::{require_admin, require_auth, require_staff};

use crate::domain::repository::{CommentRepository, EventRepository};
use crate::infra::postgres::PgEventRepository;
use crate::infra::storage::ImageStore;
use crate::presentation::handlers::{self, EventsAppState};

/// Create the events router (mounted at /api/events) with PostgreSQL
pub fn events_router(repo: PgEventRepository, images: ImageStore) -> Router {
    events_router_generic(repo, images)
}

/// Generic events router for any repository implementation
pub fn events_router_generic<R>(repo: R, images: ImageStore) -> Router
where
    R: EventRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let state = EventsAppState {
        repo: Arc::new(repo),
        images: Arc::new(images),
    };

    let public = Router::new()
        .route("/", get(handlers::list_events::<R>))
        .route("/{id}", get(handlers::get_event::<R>))
        .route("/{id}/comments", get(handlers::list_comments::<R>));

    let staff = Router::new()
        .route("/", post(handlers::create_event::<R>))
        .route_layer(middleware::from_fn(require_staff));

    // Ownership is checked against the loaded resource inside the use
    // cases; the route level only requires authentication.
    let owner = Router::new()
        .route(
            "/{id}",
            put(handlers::update_event::<R>).delete(handlers::delete_event::<R>),
        )
        .route("/{id}/comments", post(handlers::add_comment::<R>))
        .route_layer(middleware::from_fn(require_auth));

    public.merge(staff).merge(owner).with_state(state)
}

/// Create the standalone comments router (mounted at /api)
pub fn comments_router(repo: PgEventRepository, images: ImageStore) -> Router {
    comments_router_generic(repo, images)
}

/// Generic comments router
pub fn comments_router_generic<R>(repo: R, images: ImageStore) -> Router
where
    R: EventRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let state = EventsAppState {
        repo: Arc::new(repo),
        images: Arc::new(images),
    };

    Router::new()
        .route("/comments/{id}", delete(handlers::delete_comment::<R>))
        .route_layer(middleware::from_fn(require_auth))
        .with_state(state)
}

/// Create the admin moderation router (mounted at /api/admin)
pub fn admin_events_router(repo: PgEventRepository, images: ImageStore) -> Router {
    admin_events_router_generic(repo, images)
}

/// Generic admin moderation router
pub fn admin_events_router_generic<R>(repo: R, images: ImageStore) -> Router
where
    R: EventRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let state = EventsAppState {
        repo: Arc::new(repo),
        images: Arc::new(images),
    };

    Router::new()
        .route("/events/pending", get(handlers::pending_events::<R>))
        .route("/events/{id}/approve", put(handlers::approve_event::<R>))
        .route_layer(middleware::from_fn(require_admin))
        .with_state(state)
}
