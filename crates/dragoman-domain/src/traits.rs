//! Trait definitions for external collaborators
//!
//! These traits define the boundary between orchestration logic and
//! infrastructure. Implementations live in other crates.

use crate::completion::{Completion, CompletionRequest};
use async_trait::async_trait;

/// A chat-completion backend.
///
/// Implemented by the infrastructure layer (dragoman-llm). The orchestrator
/// never retries a failed call; errors surface to its caller with the
/// implementation's error as the source.
#[async_trait]
pub trait CompletionClient {
    /// Error type for completion calls
    type Error: std::error::Error + Send + Sync + 'static;

    /// Generate one reply for the given transcript
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, Self::Error>;
}
