//! Gemini `generateContent` wire types.

use crate::models::Turn;
use serde::{Deserialize, Serialize};

/// Request body for the `generateContent` endpoint.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
}

/// One conversation turn in the upstream format.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

impl From<&Turn> for Content {
    fn from(turn: &Turn) -> Self {
        Self {
            role: turn.role.as_str().to_string(),
            parts: vec![Part {
                text: turn.text.clone(),
            }],
        }
    }
}

/// Top-level `generateContent` response envelope.
///
/// Every level is defaulted: a reply with missing candidates, content,
/// parts or text deserializes cleanly and simply yields no text. Error
/// bodies from non-200 responses share this envelope via `error`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateContentResponse {
    pub candidates: Vec<Candidate>,
    pub error: Option<UpstreamError>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CandidateContent {
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamError {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_content_from_turn() {
        let turn = Turn {
            role: Role::Model,
            text: "مرحباً".to_string(),
        };
        let content = Content::from(&turn);
        assert_eq!(content.role, "model");
        assert_eq!(content.parts.len(), 1);
        assert_eq!(content.parts[0].text, "مرحباً");
    }

    #[test]
    fn test_request_serializes_camel_case_generation_config() {
        let request = GenerateContentRequest {
            contents: vec![Content::from(&Turn::user("hi"))],
            generation_config: GenerationConfig { temperature: 0.7 },
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"generationConfig\""));
        assert!(json.contains("\"temperature\":0.7"));
        assert!(json.contains("\"role\":\"user\""));
    }

    #[test]
    fn test_response_tolerates_missing_levels() {
        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.candidates.is_empty());
        assert!(empty.error.is_none());

        let hollow: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{}]}"#).unwrap();
        assert!(hollow.candidates[0].content.parts.is_empty());

        let textless: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{}]}}]}"#).unwrap();
        assert!(textless.candidates[0].content.parts[0].text.is_none());
    }

    #[test]
    fn test_error_body_deserializes() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"error":{"message":"quota exceeded","code":429}}"#).unwrap();
        assert_eq!(
            response.error.unwrap().message.as_deref(),
            Some("quota exceeded")
        );
    }
}
