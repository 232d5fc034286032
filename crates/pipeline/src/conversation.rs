//! Per-job conversation state.
//!
//! Each job gets exactly one conversation, seeded with the system
//! prompt. Every slide's text is appended as a user message and the
//! provider sees the whole history, so later slides are explained in
//! the context of earlier ones. The conversation is scoped to one job
//! and dropped when the pipeline finishes; it is never shared across
//! jobs or worker cycles.

use deckhand_llm::Message;

/// Instruction given to the provider before any slide text.
const SYSTEM_PROMPT: &str =
    "Can you explain the slides in basic english, and provide examples if needed!";

/// Accumulating message history for one job.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Start a fresh conversation holding only the system prompt.
    pub fn new() -> Self {
        Self {
            messages: vec![Message::system(SYSTEM_PROMPT)],
        }
    }

    /// Append a slide's extracted text as the next user message.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    /// Append the provider's reply.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    /// The full history to send with the next provider call.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
