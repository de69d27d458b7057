//! Assist Router and Handlers
//!
//! POST /api/translate and POST /api/chat. Both are public endpoints in
//! front of third-party services.

use axum::{Json, Router, extract::State, routing::post};
use sqlx::PgPool;
use std::sync::Arc;

use crate::buildings::{BuildingRepository, PgBuildingRepository};
use crate::chat::ChatClient;
use crate::config::AssistConfig;
use crate::dto::{ChatRequest, ChatResponse, TranslateRequest, TranslateResponse};
use crate::error::{AssistError, AssistResult};
use crate::translate::TranslateClient;

/// Shared state for assist handlers
#[derive(Clone)]
pub struct AssistAppState<B>
where
    B: BuildingRepository + Clone + Send + Sync + 'static,
{
    pub buildings: Arc<B>,
    pub translate: Arc<TranslateClient>,
    pub chat: Arc<ChatClient>,
}

/// Create the assist router (mounted at /api) with PostgreSQL
pub fn assist_router(pool: PgPool, config: AssistConfig) -> Router {
    assist_router_generic(PgBuildingRepository::new(pool), config)
}

/// Generic assist router for any building repository implementation
pub fn assist_router_generic<B>(buildings: B, config: AssistConfig) -> Router
where
    B: BuildingRepository + Clone + Send + Sync + 'static,
{
    let config = Arc::new(config);
    let state = AssistAppState {
        buildings: Arc::new(buildings),
        translate: Arc::new(TranslateClient::new(config.translate_api_key.clone())),
        chat: Arc::new(ChatClient::new(config)),
    };

    Router::new()
        .route("/translate", post(translate::<B>))
        .route("/chat", post(chat::<B>))
        .with_state(state)
}

/// POST /api/translate
async fn translate<B>(
    State(state): State<AssistAppState<B>>,
    Json(req): Json<TranslateRequest>,
) -> AssistResult<Json<TranslateResponse>>
where
    B: BuildingRepository + Clone + Send + Sync + 'static,
{
    let (Some(title), Some(description), Some(target_lang)) =
        (req.title, req.description, req.target_lang)
    else {
        return Err(AssistError::Validation(
            "Fields title, description and targetLang are required".to_string(),
        ));
    };

    let translated = state
        .translate
        .translate_event(&title, &description, &target_lang)
        .await?;

    Ok(Json(TranslateResponse {
        translated_title: translated.title,
        translated_description: translated.description,
    }))
}

/// POST /api/chat
async fn chat<B>(
    State(state): State<AssistAppState<B>>,
    Json(req): Json<ChatRequest>,
) -> AssistResult<Json<ChatResponse>>
where
    B: BuildingRepository + Clone + Send + Sync + 'static,
{
    let buildings = state.buildings.list_all().await?;
    let buildings_json = serde_json::to_string(&buildings)
        .map_err(|e| AssistError::Internal(format!("Failed to serialize buildings: {}", e)))?;

    let answer = state.chat.answer(&req.message, &buildings_json).await?;

    Ok(Json(ChatResponse { answer }))
}
