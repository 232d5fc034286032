//! Explanation provider: the chat-completion service that turns slide
//! text into a natural-language explanation.
//!
//! The [`ExplanationProvider`] trait is the seam the pipeline and the
//! worker program against; [`OpenAiProvider`] is the production
//! implementation over the OpenAI chat-completions API.

pub mod openai;
pub mod provider;

pub use openai::OpenAiProvider;
pub use provider::{ExplanationProvider, LlmError, Message, Role};
