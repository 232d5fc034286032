//! pptx slide-text extraction.
//!
//! A pptx file is a zip archive with one XML part per slide at
//! `ppt/slides/slide{n}.xml`; `n` is the container's native slide
//! order. Visible text lives in `<a:t>` elements (DrawingML text
//! runs). We stream each part with quick-xml and collect the runs.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::deck::{DeckError, DeckParser};

/// Prefix of slide parts inside the archive.
const SLIDE_PREFIX: &str = "ppt/slides/slide";

/// Suffix of slide parts inside the archive.
const SLIDE_SUFFIX: &str = ".xml";

pub struct PptxParser;

impl PptxParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PptxParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckParser for PptxParser {
    fn parse(&self, bytes: &[u8]) -> Result<Vec<String>, DeckError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| DeckError::Container(format!("failed to open pptx archive: {e}")))?;

        // Collect slide part names with their numeric position first;
        // zip entry order is not the slide order.
        let mut slide_parts: Vec<(usize, String)> = archive
            .file_names()
            .filter_map(|name| slide_number(name).map(|n| (n, name.to_string())))
            .collect();
        slide_parts.sort_by_key(|(n, _)| *n);

        let mut slides = Vec::with_capacity(slide_parts.len());
        for (_, part_name) in slide_parts {
            let mut part = archive
                .by_name(&part_name)
                .map_err(|e| DeckError::Container(format!("missing part {part_name}: {e}")))?;

            let mut xml = String::new();
            part.read_to_string(&mut xml)
                .map_err(|e| DeckError::Container(format!("failed to read {part_name}: {e}")))?;

            slides.push(extract_slide_text(&xml)?);
        }

        Ok(slides)
    }
}

/// Parse the slide index out of a part name like
/// `ppt/slides/slide12.xml`. Returns `None` for every other part.
fn slide_number(name: &str) -> Option<usize> {
    let rest = name.strip_prefix(SLIDE_PREFIX)?;
    let digits = rest.strip_suffix(SLIDE_SUFFIX)?;
    digits.parse().ok()
}

/// Extract the visible text of one slide: every `<a:t>` run, trimmed,
/// joined with single spaces.
fn extract_slide_text(xml: &str) -> Result<String, DeckError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut runs: Vec<String> = Vec::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                if e.local_name().as_ref() == b"t" {
                    in_text_run = true;
                }
            }
            Ok(Event::End(ref e)) => {
                if e.local_name().as_ref() == b"t" {
                    in_text_run = false;
                }
            }
            Ok(Event::Text(e)) => {
                if in_text_run {
                    let decoded = e.unescape().unwrap_or_default();
                    let trimmed = decoded.trim();
                    if !trimmed.is_empty() {
                        runs.push(trimmed.to_string());
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DeckError::SlideXml(format!("XML parsing error: {e}")));
            }
            _ => {}
        }
    }

    Ok(runs.join(" "))
}
