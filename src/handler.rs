//! The chat endpoint.
//!
//! One handler owns the whole request lifecycle: method dispatch, payload
//! parsing, prompt assembly, the upstream call and the reply mapping. The
//! chat widget renders only the `text` field of the response, so every
//! failure is converted to conversational text inside a 200 response; the
//! widget depends on this mapping and on the exact diagnostic strings.
//! Only a non-POST, non-OPTIONS method gets a protocol-level 405.

use crate::models::{ChatPayload, Role, Turn};
use crate::server::AppState;
use crate::{prompts, Error, Result};
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, Method, StatusCode};
use axum::response::Response;
use tracing::error;

/// Most history turns forwarded upstream per request, counted from the
/// newest. Keeps the upstream payload and token cost bounded.
const MAX_HISTORY_TURNS: usize = 4;

pub const MISSING_KEY_TEXT: &str = "⚠️ خطأ: مفتاح GEMINI_API_KEY غير موجود في إعدادات الخادم.";
pub const BAD_BODY_TEXT: &str = "⚠️ خطأ: البيانات المرسلة تالفة.";
pub const NO_REPLY_TEXT: &str = "عذراً، لم يصل رد مفهوم.";

pub async fn chat_reply(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS {
        return respond(StatusCode::OK, String::new());
    }

    if method != Method::POST {
        return respond(
            StatusCode::METHOD_NOT_ALLOWED,
            serde_json::json!({ "error": "Method Not Allowed" }).to_string(),
        );
    }

    match handle_post(&state, &body).await {
        Ok(response) => response,
        Err(err) => {
            error!("Chat handler crashed: {}", err);
            reply(&format!("⚠️ انهيار النظام: {}", err))
        }
    }
}

/// POST path. Anticipated failures return their diagnostic reply directly;
/// only errors with no mapping of their own bubble up to the crash branch.
async fn handle_post(state: &AppState, body: &[u8]) -> Result<Response> {
    let Some(chat) = state.chat.as_deref() else {
        return Ok(reply(MISSING_KEY_TEXT));
    };

    let payload = if body.is_empty() {
        ChatPayload::default()
    } else {
        match serde_json::from_slice(body) {
            Ok(payload) => payload,
            Err(_) => return Ok(reply(BAD_BODY_TEXT)),
        }
    };

    let turns = assemble_turns(&payload);

    let text = match chat.generate_reply(&turns).await {
        Ok(Some(text)) => text,
        Ok(None) => NO_REPLY_TEXT.to_string(),
        Err(Error::UpstreamRejected(message)) => format!("⚠️ خطأ من جوجل: {}", message),
        Err(Error::MalformedResponse(message)) => format!("⚠️ خطأ في معالجة الرد: {}", message),
        Err(Error::Http(e)) => format!("⚠️ خطأ في الاتصال بالسيرفر: {}", e),
        Err(other) => return Err(other),
    };

    Ok(reply(&text))
}

/// The consultant instruction turn, followed on follow-up requests by the
/// tail of the client's history with roles normalized.
fn assemble_turns(payload: &ChatPayload) -> Vec<Turn> {
    let mut turns = vec![Turn::user(prompts::consultant_prompt(
        &payload.client_info,
        payload.is_first_run,
    ))];

    if !payload.is_first_run && !payload.history.is_empty() {
        let tail = payload.history.len().saturating_sub(MAX_HISTORY_TURNS);
        turns.extend(payload.history[tail..].iter().map(|entry| Turn {
            role: Role::normalize(&entry.role),
            text: entry
                .parts
                .first()
                .map(|part| part.text.clone())
                .unwrap_or_default(),
        }));
    }

    turns
}

fn reply(text: &str) -> Response {
    respond(
        StatusCode::OK,
        serde_json::json!({ "text": text }).to_string(),
    )
}

fn respond(status: StatusCode, body: String) -> Response {
    Response::builder()
        .status(status)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header(header::CONTENT_TYPE, "application/json; charset=utf-8")
        .body(Body::from(body))
        .expect("static response parts are valid")
}
