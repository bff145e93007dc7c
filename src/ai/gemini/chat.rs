use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use crate::ai::ChatService;
use crate::models::Turn;
use crate::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Sampling temperature the widget's replies have always been tuned for.
const REPLY_TEMPERATURE: f32 = 0.7;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct GeminiChatClient {
    http: GeminiHttpClient,
}

impl GeminiChatClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(api_key, model, REQUEST_TIMEOUT, client),
        }
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }

    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .and_then(|p| p.text.clone())
    }
}

#[async_trait]
impl ChatService for GeminiChatClient {
    async fn generate_reply(&self, turns: &[Turn]) -> Result<Option<String>> {
        let request = GenerateContentRequest {
            contents: turns.iter().map(Content::from).collect(),
            generation_config: GenerationConfig {
                temperature: REPLY_TEMPERATURE,
            },
        };

        let response = self.http.generate_content(&request).await?;
        Ok(Self::extract_text(&response))
    }
}
