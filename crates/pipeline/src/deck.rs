//! The container-format seam.
//!
//! The pipeline does not care what a presentation file actually is;
//! it only needs "given a blob, produce an ordered sequence of slide
//! texts". [`DeckParser`] is that seam, with [`crate::PptxParser`] as
//! the production implementation and trivial fakes in tests.

/// Parses a presentation container into per-slide visible text.
pub trait DeckParser: Send + Sync {
    /// Extract one string per slide, in the container's native slide
    /// order. Each string is the slide's visible text runs, trimmed
    /// and joined with single spaces.
    fn parse(&self, bytes: &[u8]) -> Result<Vec<String>, DeckError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("failed to open container: {0}")]
    Container(String),

    #[error("failed to parse slide XML: {0}")]
    SlideXml(String),
}
