//! Dragoman Completion-Client Layer
//!
//! Pluggable chat-completion backends.
//!
//! # Architecture
//!
//! This crate provides implementations of the `CompletionClient` trait from
//! `dragoman-domain`. It supports multiple backends with a common interface.
//!
//! # Clients
//!
//! - `MockClient`: deterministic scripted client for testing
//! - `OpenAiClient`: OpenAI-compatible chat-completions HTTP API
//!
//! # Examples
//!
//! ```
//! use dragoman_llm::MockClient;
//!
//! let client = MockClient::new(r#"{"greeting": "hello"}"#);
//! client.push_reply("a scripted reply, consumed before the default");
//! assert_eq!(client.call_count(), 0);
//! ```

#![warn(missing_docs)]

pub mod openai;

use async_trait::async_trait;
use dragoman_domain::traits::CompletionClient;
use dragoman_domain::{Completion, CompletionRequest, Message, StopReason, Usage};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openai::OpenAiClient;

/// Errors that can occur while requesting a completion
#[derive(Error, Debug)]
pub enum CompletionError {
    /// Network or API communication error
    #[error("communication error: {0}")]
    Communication(String),

    /// Authentication or authorization rejected by the provider
    #[error("authentication rejected: {0}")]
    Auth(String),

    /// Provider-side quota exhausted
    #[error("provider rate limit exceeded")]
    RateLimited,

    /// Requested model is not available
    #[error("model not available: {0}")]
    ModelNotAvailable(String),

    /// Response body did not match the expected shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Failure scripted by a test double
    #[error("scripted error: {0}")]
    Scripted(String),
}

/// What the mock does on one call
#[derive(Debug, Clone)]
enum Script {
    Reply { content: String, stop_reason: StopReason },
    Fail(String),
}

#[derive(Debug)]
struct MockState {
    default_content: String,
    scripted: VecDeque<Script>,
    requests: Vec<CompletionRequest>,
}

/// Deterministic completion client for testing
///
/// Returns pre-configured replies without any network traffic. Scripted
/// entries are consumed in order; once exhausted, every call yields the
/// default content with a natural stop reason. Every request the mock
/// receives is recorded for later inspection.
///
/// Clones share state, so a clone handed to an orchestrator can still be
/// interrogated from the test body.
#[derive(Debug, Clone)]
pub struct MockClient {
    state: Arc<Mutex<MockState>>,
}

impl MockClient {
    /// Create a mock that answers every call with `content`
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                default_content: content.into(),
                scripted: VecDeque::new(),
                requests: Vec::new(),
            })),
        }
    }

    /// Enqueue one reply with a natural stop reason
    pub fn push_reply(&self, content: impl Into<String>) {
        self.push_reply_with(content, StopReason::Stop);
    }

    /// Enqueue one reply with an explicit stop reason
    pub fn push_reply_with(&self, content: impl Into<String>, stop_reason: StopReason) {
        self.state.lock().unwrap().scripted.push_back(Script::Reply {
            content: content.into(),
            stop_reason,
        });
    }

    /// Enqueue one failure
    pub fn push_error(&self, message: impl Into<String>) {
        self.state
            .lock()
            .unwrap()
            .scripted
            .push_back(Script::Fail(message.into()));
    }

    /// Number of calls received so far
    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    /// Every request received so far, in call order
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    /// The most recent request, if any call was made
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.state.lock().unwrap().requests.last().cloned()
    }
}

#[async_trait]
impl CompletionClient for MockClient {
    type Error = CompletionError;

    async fn complete(&self, request: CompletionRequest) -> Result<Completion, Self::Error> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request);

        let script = state.scripted.pop_front().unwrap_or_else(|| Script::Reply {
            content: state.default_content.clone(),
            stop_reason: StopReason::Stop,
        });

        match script {
            Script::Reply { content, stop_reason } => Ok(Completion {
                message: Message::assistant(content),
                stop_reason,
                usage: Usage::default(),
            }),
            Script::Fail(message) => Err(CompletionError::Scripted(message)),
        }
    }
}
