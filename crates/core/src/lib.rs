//! Shared domain types for the deckhand service.
//!
//! Everything here is pure data and pure functions: ID/timestamp
//! aliases, the domain error enum, response-text cleaning, and the
//! ordered slide-explanation mapping that the pipeline produces and
//! the artifact store persists.

pub mod error;
pub mod explanations;
pub mod text;
pub mod types;

pub use error::CoreError;
pub use explanations::SlideExplanations;
