use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::{Error, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Lightweight Gemini REST client.
///
/// Authenticates with the API key as a `key` query parameter, the scheme
/// the chat widget's backend has always used.
pub struct GeminiHttpClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiHttpClient {
    /// Construct a Gemini client.
    ///
    /// `model` should be the bare model ID (for example `gemini-1.5-flash`),
    /// not a `models/...`-prefixed path segment.
    pub fn new(api_key: String, model: String, timeout: Duration) -> Self {
        Self::new_with_client(api_key, model, timeout, Client::new())
    }

    pub fn new_with_client(
        api_key: String,
        model: String,
        timeout: Duration,
        client: Client,
    ) -> Self {
        let model = model.strip_prefix("models/").unwrap_or(&model).to_string();

        Self {
            client,
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout,
        }
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Calls Gemini's `generateContent` endpoint.
    ///
    /// The body is parsed before the status is inspected: a non-200 reply
    /// still carries a JSON envelope whose `error.message` is the only
    /// diagnostic worth relaying, and an unparseable body is reported as a
    /// malformed response whatever the status was.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = serde_json::to_string(request)?;

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to Gemini: {}", e);
                e
            })?;

        let status = response.status();
        let raw = response.text().await?;

        let parsed: GenerateContentResponse = serde_json::from_str(&raw).map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}\nBody: {}", e, raw);
            Error::MalformedResponse(e.to_string())
        })?;

        if status != StatusCode::OK {
            let message = parsed
                .error
                .and_then(|e| e.message)
                .unwrap_or_else(|| "Unknown Error".to_string());
            tracing::error!("Gemini API error (status {}): {}", status, message);
            return Err(Error::UpstreamRejected(message));
        }

        Ok(parsed)
    }
}
