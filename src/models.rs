//! Data models and structures
//!
//! Defines the inbound chat payload, the normalized conversation turn
//! handed to the chat service, and the process configuration.

use serde::Deserialize;

/// Conversation role as the upstream API understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }

    /// Clients send free-form role strings; anything that is not "user"
    /// counts as a model turn.
    pub fn normalize(role: &str) -> Self {
        if role == "user" {
            Role::User
        } else {
            Role::Model
        }
    }
}

/// One normalized message of a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// Request body sent by the chat widget. Every field is optional on the
/// wire; a missing or empty body means "first contact with defaults".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatPayload {
    pub history: Vec<HistoryEntry>,
    pub client_info: ClientInfo,
    pub is_first_run: bool,
}

/// Raw history message as sent by the client, same shape as an upstream
/// content turn but with an unnormalized role.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HistoryEntry {
    pub role: String,
    pub parts: Vec<TextPart>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TextPart {
    pub text: String,
}

/// Client project details collected by the onboarding form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientInfo {
    pub name: Option<String>,
    pub business_type: Option<String>,
    pub strategy_goal: Option<String>,
    pub budget_range: Option<String>,
    pub link: Option<String>,
    pub competitors: Option<String>,
}

pub const DEFAULT_CHAT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Missing key is recoverable: the gateway still serves and reports
    /// the problem to the client as chat text.
    pub gemini_api_key: Option<String>,
    pub chat_model: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse().map_err(|_| {
                crate::Error::Generic(format!("Invalid SERVER_PORT '{}'", raw))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            chat_model: std::env::var("CHAT_MODEL")
                .unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string()),
            host: std::env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
        })
    }
}
