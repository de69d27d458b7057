//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router, http,
    http::{Method, header},
    middleware,
};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use assist::{AssistConfig, ChatBackend};
use auth::{AuthConfig, AuthGateState, PgAuthRepository};
use events::{EventsConfig, ImageStore, PgEventRepository};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,events=info,assist=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Auth configuration: the token secret is immutable for the process
    // lifetime, and startup fails fast when it is absent or too short.
    let auth_config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        let secret_b64 =
            env::var("TOKEN_SECRET").expect("TOKEN_SECRET must be set in production");
        let secret_bytes = platform::crypto::from_base64(&secret_b64)
            .map_err(|e| anyhow::anyhow!("TOKEN_SECRET is not valid base64: {e}"))?;
        let mut config = AuthConfig::from_secret(&secret_bytes)
            .map_err(|e| anyhow::anyhow!("Invalid TOKEN_SECRET: {e}"))?;

        if let Ok(pepper_b64) = env::var("PASSWORD_PEPPER") {
            let pepper = platform::crypto::from_base64(&pepper_b64)
                .map_err(|e| anyhow::anyhow!("PASSWORD_PEPPER is not valid base64: {e}"))?;
            config.password_pepper = Some(pepper);
        }

        config
    };
    tracing::info!(issuer = %auth_config.issuer, "Token signing key initialized");

    // Events configuration
    let events_config = match env::var("UPLOAD_DIR") {
        Ok(dir) => EventsConfig::with_upload_dir(dir),
        Err(_) => EventsConfig::default(),
    };

    // Assist configuration
    let assist_config = AssistConfig {
        translate_api_key: env::var("TRANSLATE_API_KEY").unwrap_or_default(),
        gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
        chat_backend: env::var("CHAT_BACKEND")
            .ok()
            .and_then(|code| ChatBackend::from_code(&code))
            .unwrap_or_default(),
        ..AssistConfig::default()
    };

    // Repositories and stores
    let auth_repo = PgAuthRepository::new(pool.clone());
    let event_repo = PgEventRepository::new(pool.clone());
    let images = ImageStore::new(&events_config);

    // The authentication gate runs for every request and resolves the
    // bearer token (if any) to a request-scoped principal.
    let gate_state = AuthGateState {
        repo: Arc::new(auth_repo.clone()),
        config: Arc::new(auth_config.clone()),
    };

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let admin_routes = auth::admin_user_router(auth_repo.clone(), auth_config.clone())
        .merge(events::admin_events_router(event_repo.clone(), images.clone()));

    let app = Router::new()
        .nest(
            "/api/users",
            auth::user_router(auth_repo.clone(), auth_config.clone()),
        )
        .nest(
            "/api/events",
            events::events_router(event_repo.clone(), images.clone()),
        )
        .nest("/api", events::comments_router(event_repo, images))
        .nest("/api/admin", admin_routes)
        .nest("/api", assist::assist_router(pool.clone(), assist_config))
        .nest_service("/uploads", ServeDir::new(&events_config.upload_dir))
        .layer(middleware::from_fn_with_state(
            gate_state,
            auth::middleware::authenticate::<PgAuthRepository>,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
