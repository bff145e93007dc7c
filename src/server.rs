//! Router assembly and shared request state.

use crate::ai::{ChatService, GeminiChatClient};
use crate::handler::chat_reply;
use crate::models::Config;
use axum::routing::{any, get};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::warn;

#[derive(Clone)]
pub struct AppState {
    /// `None` when no API key is configured. The gateway still serves and
    /// the handler reports the missing key to the client as chat text.
    pub chat: Option<Arc<dyn ChatService>>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let chat = config.gemini_api_key.as_ref().map(|key| {
            Arc::new(GeminiChatClient::new(key.clone(), config.chat_model.clone()))
                as Arc<dyn ChatService>
        });

        if chat.is_none() {
            warn!("GEMINI_API_KEY is not set; chat replies will report the missing key");
        }

        Self { chat }
    }
}

async fn health_check() -> &'static str {
    "OK"
}

/// The chat route dispatches on method inside the handler so preflight and
/// method rejection produce the exact bodies the widget expects.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", any(chat_reply))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
