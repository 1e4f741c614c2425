//! OpenAI-compatible chat-completions client
//!
//! Talks to any endpoint that speaks the `/v1/chat/completions` shape,
//! hosted or self-hosted.
//!
//! # Features
//!
//! - Async HTTP communication via `reqwest`
//! - Configurable base URL and request timeout
//! - HTTP status mapping onto `CompletionError`
//!
//! Failed calls are never retried here; pacing and propagation policy
//! belong to the caller.
//!
//! # Examples
//!
//! ```no_run
//! use dragoman_llm::OpenAiClient;
//!
//! let client = OpenAiClient::new(std::env::var("OPENAI_API_KEY").unwrap())
//!     .with_base_url("https://api.openai.com");
//! ```

use crate::CompletionError;
use async_trait::async_trait;
use dragoman_domain::traits::CompletionClient;
use dragoman_domain::{Completion, CompletionRequest, Message, StopReason, Usage};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Default timeout for completion requests (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Chat-completions client for OpenAI-compatible APIs
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

/// Request body for the chat-completions endpoint
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    n: u32,
}

/// Response body from the chat-completions endpoint
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Usage,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
    finish_reason: Option<StopReason>,
}

impl OpenAiClient {
    /// Create a client for the default hosted endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Point the client at a different base URL (proxies, self-hosted
    /// gateways, test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = reqwest::Client::builder().timeout(timeout).build().unwrap();
        self
    }

    async fn post_chat(&self, request: &CompletionRequest) -> Result<Completion, CompletionError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let body = ChatRequest {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature,
            n: request.n,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Communication(format!("request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(CompletionError::Auth(format!("HTTP {}", status)));
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CompletionError::ModelNotAvailable(request.model.clone()));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CompletionError::RateLimited);
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(CompletionError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(format!("failed to parse body: {}", e)))?;

        debug!(
            prompt_tokens = parsed.usage.prompt_tokens,
            completion_tokens = parsed.usage.completion_tokens,
            "chat completion received"
        );

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CompletionError::InvalidResponse("empty choices array".to_string()))?;

        Ok(Completion {
            message: choice.message,
            stop_reason: choice
                .finish_reason
                .unwrap_or_else(|| StopReason::Other("unspecified".to_string())),
            usage: parsed.usage,
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    type Error = CompletionError;

    async fn complete(&self, request: CompletionRequest) -> Result<Completion, Self::Error> {
        self.post_chat(&request).await
    }
}
