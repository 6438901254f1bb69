// OpenAI Completion Driver
//
// Production CompletionProvider for OpenAI's chat completions API.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use fitcoach_core::{CoachError, CompletionProvider, CompletionRequest, Result};

use crate::types::{ChatRequest, OpenAiErrorResponse, OpenAiMessage, OpenAiResponse};

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// OpenAI completion driver
///
/// # Example
///
/// ```ignore
/// use fitcoach_openai::OpenAICompletionDriver;
///
/// let driver = OpenAICompletionDriver::from_env()?;
/// // or
/// let driver = OpenAICompletionDriver::new("your-api-key").with_model("gpt-4o-mini");
/// // or with custom endpoint
/// let driver = OpenAICompletionDriver::with_base_url("your-api-key", "https://api.example.com/v1/chat/completions");
/// ```
#[derive(Clone)]
pub struct OpenAICompletionDriver {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
    timeout: Option<Duration>,
}

impl OpenAICompletionDriver {
    /// Create a new driver with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_API_URL)
    }

    /// Create a new driver from the OPENAI_API_KEY environment variable
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| CoachError::config("OPENAI_API_KEY environment variable not set"))?;
        Ok(Self::new(api_key))
    }

    /// Create a new driver with a custom API URL (for OpenAI-compatible APIs)
    pub fn with_base_url(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_url: api_url.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Bound every request; a timeout surfaces as `CoachError::Timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoachError::config(format!("Failed to build HTTP client: {}", e)))?;
        self.timeout = Some(timeout);
        Ok(self)
    }

    /// Get the API URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn send_error(&self, err: reqwest::Error) -> CoachError {
        match self.timeout {
            Some(after) if err.is_timeout() => CoachError::timeout("completion", after),
            _ => CoachError::completion(format!("Failed to send OpenAI request: {}", err)),
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAICompletionDriver {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let body = ChatRequest {
            model: self.model.clone(),
            messages: request.messages.iter().map(OpenAiMessage::from).collect(),
            stream: false,
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| self.send_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<OpenAiErrorResponse>(&error_text)
                .map(|e| e.error.message)
                .unwrap_or(error_text);
            tracing::warn!(status = %status, "OpenAI request rejected");
            return Err(CoachError::completion(format!(
                "OpenAI API request failed with status {}: {}",
                status, detail
            )));
        }

        let parsed: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| CoachError::completion(format!("Failed to parse OpenAI response: {}", e)))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CoachError::completion("No choices in OpenAI response"))?;

        if let Some(usage) = &parsed.usage {
            tracing::debug!(
                model = %parsed.model,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                finish_reason = ?choice.finish_reason,
                "OpenAI completion finished"
            );
        }

        choice
            .message
            .content
            .ok_or_else(|| CoachError::completion("OpenAI response had no message content"))
    }

    fn model(&self) -> &str {
        &self.model
    }
}

impl std::fmt::Debug for OpenAICompletionDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAICompletionDriver")
            .field("api_url", &self.api_url())
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
