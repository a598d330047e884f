//! Gemini API client for strategy text generation.
//!
//! Thin wrapper over the `generateContent` REST endpoint. The client sends
//! one request per user action; there is no retry, backoff, or request
//! deduplication, so any failure is reported once and mapped to a fixed
//! user-facing message by the caller.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::types::StrategyError;

/// Default Gemini REST API base URL.
const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for strategy text.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini text-generation client.
pub struct GeminiClient {
    /// HTTP client
    http: reqwest::Client,
    /// Base URL for API
    base_url: String,
    /// API key for authentication
    api_key: String,
    /// Model identifier
    model: String,
}

impl GeminiClient {
    /// Create a new client against the public API.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_API_URL.to_string())
    }

    /// Create a new client with a custom base URL.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url,
            api_key,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// The model this client generates with.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate text for a prompt.
    ///
    /// Returns the concatenated text parts of the first candidate, or
    /// [`StrategyError::EmptyResponse`] when the API answers without content.
    pub async fn generate(&self, prompt: &str) -> Result<String, StrategyError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| StrategyError::ApiError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StrategyError::ApiError(format!(
                "API returned status {}",
                status
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| StrategyError::SerializationError(e.to_string()))?;

        let text = body
            .candidates
            .into_iter()
            .flatten()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(StrategyError::EmptyResponse);
        }

        Ok(text)
    }
}

/// Request body for `generateContent`.
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

/// A content block of text parts.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

/// A single text part.
#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

/// Response body for `generateContent`.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

/// A generation candidate.
#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GeminiClient::new("test-api-key".to_string());
        assert_eq!(client.model(), DEFAULT_MODEL);
    }

    #[test]
    fn test_model_override() {
        let client =
            GeminiClient::new("test-api-key".to_string()).with_model("gemini-2.5-pro".to_string());
        assert_eq!(client.model(), "gemini-2.5-pro");
    }

    #[test]
    fn test_response_parsing() {
        let json = r###"{
            "candidates": [
                {"content": {"parts": [{"text": "## Pacing\n"}, {"text": "Hold 250W."}]}}
            ]
        }"###;
        let body: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let candidate = body.candidates.unwrap().remove(0);
        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|p| p.text)
            .collect();
        assert_eq!(text, "## Pacing\nHold 250W.");
    }

    #[test]
    fn test_empty_response_parsing() {
        let body: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(body.candidates.is_none());
    }
}
