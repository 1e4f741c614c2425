//! Dragoman Translator
//!
//! Turns unstructured natural-language text into structured JSON conforming
//! to a caller-supplied JSON Schema, by delegating extraction to a
//! chat-completion backend.
//!
//! # Architecture
//!
//! ```text
//! Text + Schema → Translator → RateLimiter → CompletionClient
//!                      ↑                           │
//!                      └────── Conversation ←──────┘
//! ```
//!
//! The translator seeds a conversation with the schema instructions and the
//! caller's text, paces outbound requests against a rolling-window quota,
//! appends every reply to the transcript, and exposes the latest assistant
//! turn as parsed JSON.
//!
//! # Key Features
//!
//! - **Schema-guided extraction**: the schema is embedded verbatim
//!   (pretty-printed) into the system instructions
//! - **Rolling-window pacing**: at most N requests per window, enforced by
//!   a cooperative delay — never by an error
//! - **Conversation chaining**: revise a result with more context, bias it
//!   with worked examples, or inject raw turns
//! - **No hidden recovery**: transport failures and malformed JSON surface
//!   to the caller; nothing is retried locally
//!
//! # Example Usage
//!
//! ```no_run
//! use dragoman_translator::Translator;
//! use dragoman_llm::OpenAiClient;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = json!({
//!     "type": "object",
//!     "properties": {
//!         "name": {"type": "string"},
//!         "city": {"type": "string"}
//!     }
//! });
//!
//! let client = OpenAiClient::new(std::env::var("OPENAI_API_KEY")?);
//! let mut translator = Translator::new(client, schema);
//!
//! translator.translate("Alice is moving to Berlin").await?;
//!
//! if let Some(value) = translator.result()? {
//!     println!("{}", value);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod parse;
mod prompt;
mod rate;
mod translator;


pub use config::{TranslatorConfig, DEFAULT_MODEL};
pub use error::TranslatorError;
pub use prompt::{DEFAULT_CONTEXT_TEMPLATE, DEFAULT_SYSTEM_TEMPLATE};
pub use rate::RateLimiter;
pub use translator::Translator;
