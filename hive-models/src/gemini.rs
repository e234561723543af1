//! Gemini generative-language provider.
//!
//! Talks to Google's `generativelanguage` API. One POST per generation
//! request, no retry, no streaming.
//!
//! # Example
//!
//! ```ignore
//! use hive_models::GeminiProvider;
//!
//! let provider = GeminiProvider::new(api_key);          // gemini-pro
//! let provider = GeminiProvider::new(api_key).with_model("gemini-1.5-flash");
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use hive_core::{GenerateError, TextGenerator};

/// Default Gemini API base URL.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model, matching what the web UI advertises.
const DEFAULT_MODEL: &str = "gemini-pro";

// ────────────────────────────────────────────────────────────────────────────
// Gemini API Request/Response Types
// ────────────────────────────────────────────────────────────────────────────

/// Request body for the `:generateContent` endpoint.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Build a single-turn user request from a prompt.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

/// A content block in a Gemini request or response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A text part inside a content block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Response from the `:generateContent` endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

/// A generated candidate reply.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Content,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Feedback about the prompt, present when generation was blocked.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Token accounting reported by the API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u64,
    #[serde(default)]
    pub candidates_token_count: u64,
    #[serde(default)]
    pub total_token_count: u64,
}

impl GenerateContentResponse {
    /// Extract the reply text, joining the first candidate's parts.
    ///
    /// A blocked prompt or an empty candidate list is an API error, not an
    /// empty string.
    pub fn text(&self) -> crate::Result<String> {
        if let Some(feedback) = &self.prompt_feedback
            && let Some(reason) = &feedback.block_reason
        {
            return Err(crate::Error::ProviderApi(format!(
                "prompt blocked: {reason}"
            )));
        }

        let candidate = self
            .candidates
            .first()
            .ok_or_else(|| crate::Error::ProviderApi("no candidates in response".to_string()))?;

        let text: String = candidate
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();

        Ok(text)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiProvider
// ────────────────────────────────────────────────────────────────────────────

/// Gemini generative-language provider.
pub struct GeminiProvider {
    base_url: String,
    model: String,
    api_key: SecretString,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a provider for the default model against the public API.
    ///
    /// The key is not validated here; a missing or bad key surfaces as a
    /// provider API error on the first request.
    pub fn new(api_key: SecretString) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Override the base URL (used by tests against a local stub).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Get the provider name.
    pub fn name(&self) -> &str {
        "gemini"
    }

    /// The model this provider targets.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The base URL this provider targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform a generation request for a single prompt.
    pub async fn generate_content(&self, prompt: &str) -> crate::Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let request = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| crate::Error::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(crate::Error::ProviderApi(format!(
                "Gemini API returned {}: {}",
                status, body
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| crate::Error::Request(e.to_string()))?;

        if let Some(usage) = &body.usage_metadata {
            tracing::debug!(
                prompt_tokens = usage.prompt_token_count,
                output_tokens = usage.candidates_token_count,
                "gemini generation completed"
            );
        }

        body.text()
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        self.generate_content(prompt).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> GeminiProvider {
        GeminiProvider::new(SecretString::from("test-key".to_string()))
    }

    #[test]
    fn new_uses_default_model_and_url() {
        let provider = provider();
        assert_eq!(provider.model(), "gemini-pro");
        assert_eq!(
            provider.base_url(),
            "https://generativelanguage.googleapis.com"
        );
        assert_eq!(provider.name(), "gemini");
    }

    #[test]
    fn with_model_overrides_model() {
        let provider = provider().with_model("gemini-1.5-flash");
        assert_eq!(provider.model(), "gemini-1.5-flash");
    }

    #[test]
    fn request_serializes_prompt_as_user_content() {
        let request = GenerateContentRequest::from_prompt("Generate Python code for: factorial");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(
            json["contents"][0]["parts"][0]["text"],
            "Generate Python code for: factorial"
        );
    }

    // ────────────────────────────────────────────────────────────────────────
    // Response parsing
    // ────────────────────────────────────────────────────────────────────────

    #[test]
    fn parse_response_extracts_candidate_text() {
        let json = r#"{
            "candidates": [
                {
                    "content": {
                        "role": "model",
                        "parts": [{"text": "def factorial(n):\n    return 1"}]
                    },
                    "finishReason": "STOP"
                }
            ],
            "usageMetadata": {
                "promptTokenCount": 8,
                "candidatesTokenCount": 12,
                "totalTokenCount": 20
            }
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().unwrap(), "def factorial(n):\n    return 1");
        assert_eq!(response.usage_metadata.unwrap().total_token_count, 20);
    }

    #[test]
    fn parse_response_joins_multiple_parts() {
        let json = r#"{
            "candidates": [
                {
                    "content": {
                        "role": "model",
                        "parts": [{"text": "hello "}, {"text": "world"}]
                    }
                }
            ]
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().unwrap(), "hello world");
    }

    #[test]
    fn empty_candidates_is_an_api_error() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        let err = response.text().unwrap_err();
        assert!(matches!(err, crate::Error::ProviderApi(_)));
        assert!(err.to_string().contains("no candidates"));
    }

    #[test]
    fn blocked_prompt_is_an_api_error() {
        let json = r#"{
            "candidates": [],
            "promptFeedback": {"blockReason": "SAFETY"}
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let err = response.text().unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    // ────────────────────────────────────────────────────────────────────────
    // TextGenerator wiring
    // ────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn unreachable_host_surfaces_as_request_error() {
        // Nothing listens on this port; the provider must fold the
        // transport failure into GenerateError::Request, never panic.
        let provider = provider().with_base_url("http://127.0.0.1:1");

        let err = provider.generate("anything").await.unwrap_err();
        assert!(matches!(err, GenerateError::Request(_)));
    }

    #[tokio::test]
    #[ignore = "requires network access and GEMINI_API_KEY"]
    async fn integration_generate_against_live_api() {
        let Ok(key) = std::env::var("GEMINI_API_KEY") else {
            eprintln!("Skipping: GEMINI_API_KEY not set");
            return;
        };

        let provider = GeminiProvider::new(SecretString::from(key));
        let text = provider
            .generate_content("Say 'hello' and nothing else.")
            .await
            .expect("generation should succeed");
        assert!(!text.is_empty());
    }
}
