//! The slide processing pipeline: open a presentation blob, walk its
//! slides in native order, and ask the explanation provider about each
//! one over an accumulating per-job conversation.

pub mod conversation;
pub mod deck;
pub mod pptx;
pub mod process;

pub use conversation::Conversation;
pub use deck::{DeckError, DeckParser};
pub use pptx::PptxParser;
pub use process::{explain_deck, PipelineError};
