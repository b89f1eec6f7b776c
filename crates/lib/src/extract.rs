//! # Document Extraction Port
//!
//! The contract between the interview pipeline and document-extractor plugins
//! (e.g. `brandcircle-pdf`). Each plugin maps its own failures onto
//! `ExtractionError` so the pipeline can treat them uniformly.

use crate::types::ExtractedText;
use async_trait::async_trait;
use thiserror::Error;

/// A generic error type for all extractor plugins.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("The document payload is empty")]
    EmptyPayload,

    #[error("Failed to parse the document: {0}")]
    Parse(String),

    #[error("An unexpected internal error occurred during extraction: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Converts raw document bytes into normalized, markdown-flavored text.
///
/// Implementations perform exactly one attempt; the pipeline does not retry.
/// An empty result is allowed and means the document carried no text.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract(&self, data: &[u8]) -> Result<ExtractedText, ExtractionError>;
}
