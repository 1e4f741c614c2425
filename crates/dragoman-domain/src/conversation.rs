//! Ordered conversation transcript

use crate::message::{Message, Role};

/// An ordered, append-only sequence of role-tagged messages.
///
/// `reset` is the only operation that removes messages; every other
/// mutation appends. Past entries are never reordered or edited, so the
/// transcript a request was built from is always a prefix of the
/// transcript its reply lands in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the transcript with exactly one system message followed by
    /// one user message.
    pub fn reset(&mut self, system: impl Into<String>, user: impl Into<String>) {
        self.messages.clear();
        self.messages.push(Message::system(system));
        self.messages.push(Message::user(user));
    }

    /// Append one message
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Content of the final message, if and only if it is an assistant turn
    pub fn last_assistant_content(&self) -> Option<&str> {
        match self.messages.last() {
            Some(m) if m.role == Role::Assistant => Some(&m.content),
            _ => None,
        }
    }

    /// Whether any assistant turn exists in the transcript
    pub fn has_assistant_turn(&self) -> bool {
        self.messages.iter().any(|m| m.role == Role::Assistant)
    }

    /// All messages, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when the transcript holds no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
