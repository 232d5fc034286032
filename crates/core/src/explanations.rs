//! The per-slide explanation mapping produced by the pipeline.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping of `slide1..slideN` to explanation text.
///
/// Keys are assigned on insertion, 1-based, in slide order. The map
/// serializes as a plain JSON object whose key order is the slide
/// order, which is exactly the artifact document format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlideExplanations {
    slides: IndexMap<String, String>,
}

impl SlideExplanations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the explanation for the next slide, assigning the key
    /// `slide{n}` where `n` is the new slide count.
    pub fn push(&mut self, explanation: String) {
        let key = format!("slide{}", self.slides.len() + 1);
        self.slides.insert(key, explanation);
    }

    /// Explanation for a 1-based slide index, if present.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slides.get(&format!("slide{index}")).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Iterate `(key, explanation)` pairs in slide order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.slides.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
