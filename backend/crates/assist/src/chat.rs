//! Campus Chat Proxy
//!
//! Builds a grounded prompt from the building reference data and the
//! user's question, then asks the configured LLM backend.

use serde_json::{Value, json};
use std::sync::Arc;

use crate::config::{AssistConfig, ChatBackend};
use crate::error::{AssistError, AssistResult};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// LLM chat client
#[derive(Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    config: Arc<AssistConfig>,
}

impl ChatClient {
    pub fn new(config: Arc<AssistConfig>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Answer a campus question grounded on the building data
    pub async fn answer(&self, message: &str, buildings_json: &str) -> AssistResult<String> {
        let prompt = build_prompt(message, buildings_json);

        match self.config.chat_backend {
            ChatBackend::Gemini => self.ask_gemini(&prompt).await,
            ChatBackend::Ollama => self.ask_ollama(&prompt).await,
        }
    }

    async fn ask_gemini(&self, prompt: &str) -> AssistResult<String> {
        let url = format!(
            "{}/{}:generateContent",
            GEMINI_BASE_URL, self.config.gemini_model
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.config.gemini_api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AssistError::Provider(format!(
                "Gemini returned {}: {}",
                status, detail
            )));
        }

        let body: Value = response.json().await?;
        parse_gemini_response(&body)
            .ok_or_else(|| AssistError::Provider(format!("unexpected Gemini response: {}", body)))
    }

    async fn ask_ollama(&self, prompt: &str) -> AssistResult<String> {
        let url = format!("{}/api/generate", self.config.ollama_url);

        let body = json!({
            "model": self.config.ollama_model,
            "prompt": prompt,
            "stream": false
        });

        let response = self.http.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AssistError::Provider(format!(
                "Ollama returned {}: {}",
                status, detail
            )));
        }

        let body: Value = response.json().await?;
        parse_ollama_response(&body)
            .ok_or_else(|| AssistError::Provider(format!("unexpected Ollama response: {}", body)))
    }
}

/// Assemble the grounded prompt
fn build_prompt(message: &str, buildings_json: &str) -> String {
    format!(
        "You are the campus guide chatbot for the university map.\n\
         The JSON below contains the campus building records.\n\
         Answer accurately and only from this data.\n\n\
         --- Campus building data (JSON) ---\n\
         {buildings_json}\n\n\
         --- User question ---\n\
         {message}\n\n\
         --- Answer ---\n"
    )
}

fn parse_gemini_response(body: &Value) -> Option<String> {
    body.pointer("/candidates/0/content/parts/0/text")?
        .as_str()
        .map(str::to_string)
}

fn parse_ollama_response(body: &Value) -> Option<String> {
    body.get("response")?.as_str().map(str::to_string)
}
