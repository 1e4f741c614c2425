//! Value types crossing the completion-client boundary

use crate::message::Message;
use serde::{Deserialize, Serialize};

/// One completion request: the full transcript plus generation parameters.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    /// Transcript, oldest first
    pub messages: Vec<Message>,
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Number of completions requested; the orchestrator always asks for one
    pub n: u32,
}

impl CompletionRequest {
    /// Build a request for a single completion
    pub fn new(messages: Vec<Message>, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            messages,
            model: model.into(),
            temperature,
            n: 1,
        }
    }
}

/// Why the provider stopped generating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of the reply
    Stop,
    /// Token limit reached; the reply is likely truncated
    Length,
    /// Provider-side content filtering cut the reply short
    ContentFilter,
    /// Any reason this crate does not model
    #[serde(untagged)]
    Other(String),
}

impl StopReason {
    /// True for the normal "ran to completion" reason
    pub fn is_natural(&self) -> bool {
        matches!(self, StopReason::Stop)
    }
}

/// Token accounting reported by the provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens consumed by the transcript
    #[serde(default)]
    pub prompt_tokens: u32,
    /// Tokens generated in the reply
    #[serde(default)]
    pub completion_tokens: u32,
    /// Total of the above
    #[serde(default)]
    pub total_tokens: u32,
}

/// One generated reply plus provider metadata
#[derive(Debug, Clone)]
pub struct Completion {
    /// The generated message; conforming providers tag it `assistant`
    pub message: Message,
    /// Termination reason reported by the provider
    pub stop_reason: StopReason,
    /// Token accounting for this request
    pub usage: Usage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_always_asks_for_one_completion() {
        let request = CompletionRequest::new(vec![Message::user("hi")], "some-model", 0.7);
        assert_eq!(request.n, 1);
        assert_eq!(request.model, "some-model");
    }

    #[test]
    fn test_stop_reason_wire_strings() {
        let reason: StopReason = serde_json::from_str(r#""stop""#).unwrap();
        assert_eq!(reason, StopReason::Stop);
        assert!(reason.is_natural());

        let reason: StopReason = serde_json::from_str(r#""length""#).unwrap();
        assert_eq!(reason, StopReason::Length);
        assert!(!reason.is_natural());

        let reason: StopReason = serde_json::from_str(r#""content_filter""#).unwrap();
        assert_eq!(reason, StopReason::ContentFilter);
    }

    #[test]
    fn test_unknown_stop_reason_is_preserved() {
        let reason: StopReason = serde_json::from_str(r#""tool_calls""#).unwrap();
        assert_eq!(reason, StopReason::Other("tool_calls".to_string()));
        assert!(!reason.is_natural());
    }

    #[test]
    fn test_usage_defaults_for_missing_fields() {
        let usage: Usage = serde_json::from_str(r#"{"prompt_tokens": 7}"#).unwrap();
        assert_eq!(usage.prompt_tokens, 7);
        assert_eq!(usage.completion_tokens, 0);
        assert_eq!(usage.total_tokens, 0);
    }
}
