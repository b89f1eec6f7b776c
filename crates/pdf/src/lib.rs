//! # brandcircle-pdf: PDF Text Extraction Plugin
//!
//! This crate provides the text extraction logic for PDF documents, acting as
//! a plugin for the `brandcircle` pipeline. It implements the
//! `DocumentExtractor` trait from `brandcircle`.

use async_trait::async_trait;
use brandcircle::{DocumentExtractor, ExtractedText, ExtractionError};
use pdf::content::{Op, TextDrawAdjusted};
use pdf::file::FileOptions;
use tracing::{debug, instrument, warn};

/// Kerning adjustments wider than this (in thousandths of a text-space unit)
/// are rendered as a word gap.
const WORD_GAP_THRESHOLD: f32 = 200.0;

/// Extracts plain text from every page of a PDF, in page order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentExtractor for PdfTextExtractor {
    #[instrument(skip(self, data), fields(size = data.len()))]
    async fn extract(&self, data: &[u8]) -> Result<ExtractedText, ExtractionError> {
        if data.is_empty() {
            return Err(ExtractionError::EmptyPayload);
        }

        // PDF parsing is CPU-bound.
        let pdf_data = data.to_vec();
        let raw_text = tokio::task::spawn_blocking(move || extract_text_from_pdf(&pdf_data))
            .await
            .map_err(|e| ExtractionError::Internal(anyhow::anyhow!(e)))??;

        let text = ExtractedText::new(normalize_whitespace(&raw_text));
        if text.is_blank() {
            warn!("PDF parsed successfully but contained no extractable text.");
        } else {
            debug!(
                char_count = text.char_count(),
                "Extracted text from PDF"
            );
        }
        Ok(text)
    }
}

/// Extracts text from all pages of a PDF synchronously.
///
/// Text objects end with a newline and pages are separated by a blank line.
fn extract_text_from_pdf(pdf_data: &[u8]) -> Result<String, ExtractionError> {
    let file = FileOptions::cached()
        .load(pdf_data)
        .map_err(|e| ExtractionError::Parse(e.to_string()))?;
    let resolver = file.resolver();
    let mut full_text = String::new();

    for page_num in 0..file.num_pages() {
        let page = file
            .get_page(page_num)
            .map_err(|e| ExtractionError::Parse(e.to_string()))?;
        if page_num > 0 {
            full_text.push_str("\n\n");
        }
        if let Some(content) = &page.contents {
            let operations = content
                .operations(&resolver)
                .map_err(|e| ExtractionError::Parse(e.to_string()))?;
            for op in operations.iter() {
                match op {
                    Op::TextDraw { text } => full_text.push_str(&text.to_string_lossy()),
                    Op::TextDrawAdjusted { array } => {
                        for item in array {
                            match item {
                                TextDrawAdjusted::Text(text) => {
                                    full_text.push_str(&text.to_string_lossy())
                                }
                                TextDrawAdjusted::Spacing(gap) if -gap > WORD_GAP_THRESHOLD => {
                                    full_text.push(' ')
                                }
                                TextDrawAdjusted::Spacing(_) => {}
                            }
                        }
                    }
                    Op::TextNewline | Op::EndText => full_text.push('\n'),
                    _ => {}
                }
            }
        }
    }
    Ok(full_text)
}

/// Collapses runs of spaces and tabs, trims every line, and collapses runs of
/// blank lines into one.
fn normalize_whitespace(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    let mut pending_blank = false;

    for line in raw.lines() {
        let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            pending_blank = !normalized.is_empty();
            continue;
        }
        if !normalized.is_empty() {
            normalized.push('\n');
            if pending_blank {
                normalized.push('\n');
            }
        }
        normalized.push_str(&collapsed);
        pending_blank = false;
    }

    normalized
}
