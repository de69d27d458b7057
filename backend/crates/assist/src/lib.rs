//! Assist Backend Module
//!
//! Thin proxies to third-party services:
//! - Translation of event cards (Google Cloud Translation v2)
//! - Campus chat grounded on building data (Gemini or a local Ollama)
//!
//! Deliberately flat: there is no domain here, only clients, DTOs and a
//! router.

pub mod buildings;
pub mod chat;
pub mod config;
pub mod dto;
pub mod error;
pub mod router;
pub mod translate;

// Re-exports for convenience
pub use buildings::{Building, BuildingRepository, PgBuildingRepository};
pub use chat::ChatClient;
pub use config::{AssistConfig, ChatBackend};
pub use error::{AssistError, AssistResult};
pub use router::{assist_router, assist_router_generic};
pub use translate::{TranslateClient, TranslatedEvent};
