//! The per-job pipeline: parse the deck, explain each slide.

use deckhand_core::text::clean_text;
use deckhand_core::SlideExplanations;
use deckhand_llm::ExplanationProvider;

use crate::conversation::Conversation;
use crate::deck::{DeckError, DeckParser};

/// Prefix for the inline explanation written when one slide's
/// provider call fails.
const SLIDE_ERROR_PREFIX: &str = "Something is wrong: Error processing slide:";

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Explain every slide of a presentation blob.
///
/// Slides are processed strictly in source order, each provider call
/// carrying the full conversation so far. A failed provider call is
/// absorbed at slide granularity: that slide's explanation becomes an
/// inline error string and the remaining slides still run. Only a
/// parser failure aborts the whole job.
pub async fn explain_deck<P: ExplanationProvider + ?Sized>(
    parser: &dyn DeckParser,
    provider: &P,
    bytes: &[u8],
) -> Result<SlideExplanations, PipelineError> {
    let slides = parser.parse(bytes)?;

    let mut conversation = Conversation::new();
    let mut explanations = SlideExplanations::new();

    for (index, slide_text) in slides.into_iter().enumerate() {
        conversation.push_user(slide_text);

        match provider.complete(conversation.messages()).await {
            Ok(reply) => {
                let cleaned = clean_text(&reply);
                conversation.push_assistant(cleaned.clone());
                explanations.push(cleaned);
            }
            Err(e) => {
                tracing::warn!(
                    slide = index + 1,
                    error = %e,
                    "Provider call failed; recording inline error for this slide",
                );
                explanations.push(format!("{SLIDE_ERROR_PREFIX} {e}"));
            }
        }
    }

    Ok(explanations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use deckhand_llm::{LlmError, Message, Role};
    use std::sync::Mutex;

    /// Fake parser: splits UTF-8 input on `---` lines, one slide per
    /// chunk.
    struct SplitParser;

    impl DeckParser for SplitParser {
        fn parse(&self, bytes: &[u8]) -> Result<Vec<String>, DeckError> {
            let text = std::str::from_utf8(bytes)
                .map_err(|e| DeckError::Container(e.to_string()))?;
            Ok(text.split("---").map(|s| s.trim().to_string()).collect())
        }
    }

    /// Fake provider: echoes the latest user message and records every
    /// history it was called with.
    struct EchoProvider {
        histories: Mutex<Vec<Vec<Message>>>,
    }

    impl EchoProvider {
        fn new() -> Self {
            Self {
                histories: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ExplanationProvider for EchoProvider {
        async fn complete(&self, messages: &[Message]) -> Result<String, LlmError> {
            self.histories.lock().unwrap().push(messages.to_vec());
            let last_user = messages
                .iter()
                .rev()
                .find(|m| m.role == Role::User)
                .expect("no user message");
            Ok(format!("about: {}", last_user.content))
        }
    }

    /// Fake provider that fails on one specific slide (1-based call
    /// index) and echoes otherwise.
    struct FlakyProvider {
        fail_on_call: usize,
        calls: Mutex<usize>,
    }

    #[async_trait]
    impl ExplanationProvider for FlakyProvider {
        async fn complete(&self, messages: &[Message]) -> Result<String, LlmError> {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            if *calls == self.fail_on_call {
                return Err(LlmError::Api {
                    status: 500,
                    body: "upstream blew up".into(),
                });
            }
            let last_user = messages.iter().rev().find(|m| m.role == Role::User).unwrap();
            Ok(format!("about: {}", last_user.content))
        }
    }

    #[tokio::test]
    async fn produces_one_keyed_entry_per_slide_in_order() {
        let provider = EchoProvider::new();
        let out = explain_deck(&SplitParser, &provider, b"alpha---beta---gamma")
            .await
            .unwrap();

        assert_eq!(out.len(), 3);
        assert_eq!(out.get(1), Some("about: alpha"));
        assert_eq!(out.get(2), Some("about: beta"));
        assert_eq!(out.get(3), Some("about: gamma"));
    }

    #[tokio::test]
    async fn later_slides_see_earlier_context() {
        let provider = EchoProvider::new();
        explain_deck(&SplitParser, &provider, b"alpha---beta")
            .await
            .unwrap();

        let histories = provider.histories.lock().unwrap();
        assert_eq!(histories.len(), 2);

        // First call: system + slide 1.
        assert_eq!(histories[0].len(), 2);

        // Second call: system + slide 1 + its reply + slide 2.
        assert_eq!(histories[1].len(), 4);
        assert_eq!(histories[1][1].content, "alpha");
        assert_eq!(histories[1][2].role, Role::Assistant);
        assert_eq!(histories[1][2].content, "about: alpha");
        assert_eq!(histories[1][3].content, "beta");
    }

    #[tokio::test]
    async fn one_failing_slide_does_not_abort_the_job() {
        let provider = FlakyProvider {
            fail_on_call: 2,
            calls: Mutex::new(0),
        };
        let out = explain_deck(&SplitParser, &provider, b"alpha---beta---gamma")
            .await
            .unwrap();

        assert_eq!(out.len(), 3);
        assert_eq!(out.get(1), Some("about: alpha"));
        assert!(out.get(2).unwrap().starts_with(SLIDE_ERROR_PREFIX));
        assert_eq!(out.get(3), Some("about: gamma"));
    }

    #[tokio::test]
    async fn replies_are_cleaned() {
        struct MessyProvider;

        #[async_trait]
        impl ExplanationProvider for MessyProvider {
            async fn complete(&self, _messages: &[Message]) -> Result<String, LlmError> {
                Ok("  multi\nline \u{2014} reply  ".into())
            }
        }

        let out = explain_deck(&SplitParser, &MessyProvider, b"only slide")
            .await
            .unwrap();
        assert_eq!(out.get(1), Some("multiline  reply"));
    }

    #[tokio::test]
    async fn parser_failure_aborts() {
        let provider = EchoProvider::new();
        let err = explain_deck(&SplitParser, &provider, &[0xff, 0xfe])
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::Deck(_)));
        assert!(provider.histories.lock().unwrap().is_empty());
    }
}
