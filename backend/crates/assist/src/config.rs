//! Assist Configuration
//!
//! API keys and backend selection for the translation and chat proxies.
//! Loaded once at startup; absent keys simply make the corresponding
//! proxy fail with an upstream error when called.

/// Which LLM answers the campus chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatBackend {
    /// Google Gemini `generateContent` API
    #[default]
    Gemini,
    /// A local Ollama instance
    Ollama,
}

impl ChatBackend {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "gemini" => Some(Self::Gemini),
            "ollama" => Some(Self::Ollama),
            _ => None,
        }
    }
}

/// Assist application configuration
#[derive(Debug, Clone)]
pub struct AssistConfig {
    /// Google Cloud Translation API key
    pub translate_api_key: String,
    /// Gemini API key
    pub gemini_api_key: String,
    /// Gemini model name
    pub gemini_model: String,
    /// Selected chat backend
    pub chat_backend: ChatBackend,
    /// Base URL of the local Ollama instance
    pub ollama_url: String,
    /// Ollama model name
    pub ollama_model: String,
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            translate_api_key: String::new(),
            gemini_api_key: String::new(),
            gemini_model: "gemini-2.5-flash".to_string(),
            chat_backend: ChatBackend::Gemini,
            ollama_url: "http://localhost:11434".to_string(),
            ollama_model: "llama3.1:8b".to_string(),
        }
    }
}
