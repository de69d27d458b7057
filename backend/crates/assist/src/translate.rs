//! Translation Proxy
//!
//! Thin client over the Google Cloud Translation v2 REST API. The source
//! language is detected first; when it already matches the target the
//! input is echoed back untranslated.

use serde_json::{Value, json};

use crate::error::{AssistError, AssistResult};

const DETECT_URL: &str = "https://translation.googleapis.com/language/translate/v2/detect";
const TRANSLATE_URL: &str = "https://translation.googleapis.com/language/translate/v2";

/// A translated event card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedEvent {
    pub title: String,
    pub description: String,
}

/// Google Translation API client
#[derive(Clone)]
pub struct TranslateClient {
    http: reqwest::Client,
    api_key: String,
}

impl TranslateClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    /// Translate an event's title and description into `target_lang`
    pub async fn translate_event(
        &self,
        title: &str,
        description: &str,
        target_lang: &str,
    ) -> AssistResult<TranslatedEvent> {
        let detected = self.detect(title).await?;

        if detected == target_lang {
            return Ok(TranslatedEvent {
                title: title.to_string(),
                description: description.to_string(),
            });
        }

        Ok(TranslatedEvent {
            title: self.translate(title, target_lang).await?,
            description: self.translate(description, target_lang).await?,
        })
    }

    /// Detect the language of a text sample
    async fn detect(&self, q: &str) -> AssistResult<String> {
        let body = self
            .post_json(DETECT_URL, &json!({ "q": q }))
            .await?;

        parse_detect_response(&body)
            .ok_or_else(|| AssistError::Provider(format!("unexpected detect response: {}", body)))
    }

    /// Translate a single text into the target language
    async fn translate(&self, q: &str, target: &str) -> AssistResult<String> {
        let body = self
            .post_json(
                TRANSLATE_URL,
                &json!({ "q": q, "target": target, "format": "text" }),
            )
            .await?;

        parse_translate_response(&body).ok_or_else(|| {
            AssistError::Provider(format!("unexpected translate response: {}", body))
        })
    }

    async fn post_json(&self, url: &str, body: &Value) -> AssistResult<Value> {
        let response = self
            .http
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AssistError::Provider(format!(
                "translation API returned {}: {}",
                status, detail
            )));
        }

        Ok(response.json().await?)
    }
}

fn parse_detect_response(body: &Value) -> Option<String> {
    body.pointer("/data/detections/0/0/language")?
        .as_str()
        .map(str::to_string)
}

fn parse_translate_response(body: &Value) -> Option<String> {
    body.pointer("/data/translations/0/translatedText")?
        .as_str()
        .map(str::to_string)
}
