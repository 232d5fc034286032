//! Cleanup for provider responses before they are stored.

/// Normalize an explanation string: drop newlines, drop any
/// non-ASCII characters, and trim surrounding whitespace.
///
/// Artifacts are flat one-line-per-slide JSON strings, so embedded
/// newlines and exotic codepoints from the provider are stripped
/// rather than escaped.
pub fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|c| *c != '\n' && c.is_ascii())
        .collect::<String>()
        .trim()
        .to_string()
}
