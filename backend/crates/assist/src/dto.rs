//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// Translate request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub target_lang: Option<String>,
}

/// Translate response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_title: String,
    pub translated_description: String,
}

/// Chat request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
}

/// Chat response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub answer: String,
}
