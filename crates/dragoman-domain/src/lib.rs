//! Dragoman Domain Layer
//!
//! This crate contains the core vocabulary for Dragoman: the conversation
//! transcript exchanged with a chat-completion backend and the value types
//! that cross that boundary.
//!
//! ## Key Concepts
//!
//! - **Message**: one role-tagged turn (system / user / assistant)
//! - **Conversation**: the ordered transcript sent to the model on every
//!   request — append-only between resets
//! - **Completion**: one generated reply plus stop reason and token usage
//! - **CompletionClient**: the trait boundary behind which providers live
//!
//! ## Architecture
//!
//! This crate holds no I/O and no orchestration policy. Provider
//! implementations live in `dragoman-llm`; the request-pacing orchestrator
//! lives in `dragoman-translator`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod completion;
pub mod conversation;
pub mod message;
pub mod traits;

// Re-exports for convenience
pub use completion::{Completion, CompletionRequest, StopReason, Usage};
pub use conversation::Conversation;
pub use message::{Message, Role};
