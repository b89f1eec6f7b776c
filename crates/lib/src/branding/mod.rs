//! # Interview Processing Pipeline
//!
//! Turns an uploaded interview PDF into a `GoldenCircleResponse`:
//!
//! 1.  **Validation**: the upload must have a filename and the PDF media type.
//! 2.  **Extraction**: the configured `DocumentExtractor` converts the bytes to text.
//! 3.  **Generation**: the AI-backed source is tried first when configured. Any
//!     failure routes to the fallback source, so inference errors never reach
//!     the caller.
//! 4.  **Brand name resolution**: override > inferred > filename-derived.
//! 5.  **Assembly**: the response is validated; a failure here is a server fault.

pub mod brand_name;
pub mod sources;

pub use brand_name::BrandName;
pub use sources::{
    fallback_golden_circle, GeneratedGoldenCircle, GoldenCircleSource, HeuristicSource,
    InferenceSource, SourceFailure, SourceKind,
};

use crate::{
    constants::PDF_MIME_TYPE,
    extract::{DocumentExtractor, ExtractionError},
    types::{AssemblyError, ExtractedText, GoldenCircleResponse, UploadedInterview},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

// --- Error Definitions ---

#[derive(Error, Debug)]
pub enum BrandingError {
    #[error("No file provided")]
    NoFile,
    #[error("Unsupported file type. Allowed types: ['{allowed}']", allowed = PDF_MIME_TYPE)]
    UnsupportedFileType(String),
    #[error("Failed to extract text from PDF. Ensure the PDF is readable.")]
    Extraction(#[source] ExtractionError),
    #[error("Failed to assemble Golden Circle response: {0}")]
    Assembly(#[from] AssemblyError),
    #[error("Golden Circle generation failed: {0}")]
    Generation(#[source] SourceFailure),
}

impl BrandingError {
    /// Whether the error was caused by the caller's input rather than a server fault.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            BrandingError::NoFile
                | BrandingError::UnsupportedFileType(_)
                | BrandingError::Extraction(_)
        )
    }
}

// --- Pipeline ---

/// The request-independent context for producing Golden Circles.
///
/// Built once at startup and shared read-only across requests.
#[derive(Clone)]
pub struct BrandingPipeline {
    extractor: Arc<dyn DocumentExtractor>,
    primary: Option<Arc<dyn GoldenCircleSource>>,
    fallback: Arc<dyn GoldenCircleSource>,
}

impl BrandingPipeline {
    /// Creates a heuristic-only pipeline over `extractor`.
    pub fn new(extractor: Arc<dyn DocumentExtractor>) -> Self {
        Self {
            extractor,
            primary: None,
            fallback: Arc::new(HeuristicSource),
        }
    }

    /// Adds a source that is tried before the fallback.
    pub fn with_primary_source(mut self, source: Arc<dyn GoldenCircleSource>) -> Self {
        self.primary = Some(source);
        self
    }

    /// Replaces the fallback source. Defaults to `HeuristicSource`.
    pub fn with_fallback_source(mut self, source: Arc<dyn GoldenCircleSource>) -> Self {
        self.fallback = source;
        self
    }

    pub fn primary_source_kind(&self) -> Option<SourceKind> {
        self.primary.as_ref().map(|source| source.kind())
    }

    /// Produces a Golden Circle from an uploaded interview.
    ///
    /// Validation and extraction failures are returned as client errors.
    /// Failures of the primary source are logged and recovered via the
    /// fallback source.
    #[instrument(skip(self, interview, brand_name_override), fields(filename = ?interview.filename, size = interview.data.len()))]
    pub async fn produce_golden_circle(
        &self,
        interview: UploadedInterview,
        brand_name_override: Option<&str>,
    ) -> Result<GoldenCircleResponse, BrandingError> {
        let filename = validate(&interview)?;

        let text = self
            .extractor
            .extract(&interview.data)
            .await
            .map_err(|e| {
                warn!("Text extraction failed for '{}': {}", filename, e);
                BrandingError::Extraction(e)
            })?;
        debug!(
            word_count = text.word_count(),
            char_count = text.char_count(),
            preview = %text.preview(),
            "Extracted interview text"
        );

        let brand_hint = BrandName::resolve(brand_name_override, None, filename);
        let generated = self.generate(&text, &brand_hint).await?;

        let brand_name = BrandName::resolve(
            brand_name_override,
            generated.inferred_brand_name.as_deref(),
            filename,
        );
        let response =
            GoldenCircleResponse::assemble(brand_name.into_inner(), generated.golden_circle)?;

        info!(
            "Successfully generated Golden Circle for {}",
            response.brand_name
        );
        Ok(response)
    }

    async fn generate(
        &self,
        text: &ExtractedText,
        brand_hint: &BrandName,
    ) -> Result<GeneratedGoldenCircle, BrandingError> {
        if let Some(primary) = &self.primary {
            match primary.generate(text, brand_hint).await {
                Ok(generated) => return Ok(generated),
                Err(failure) => warn!(
                    "Golden Circle extraction via {} source failed ({}: {}). Falling back to {} generation.",
                    primary.kind(),
                    failure.kind(),
                    failure,
                    self.fallback.kind()
                ),
            }
        }

        self.fallback
            .generate(text, brand_hint)
            .await
            .map_err(BrandingError::Generation)
    }
}

/// Checks the upload before any extraction is attempted and returns its filename.
fn validate(interview: &UploadedInterview) -> Result<&str, BrandingError> {
    let filename = interview
        .filename
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or(BrandingError::NoFile)?;

    if interview.content_type != PDF_MIME_TYPE {
        return Err(BrandingError::UnsupportedFileType(
            interview.content_type.clone(),
        ));
    }

    Ok(filename)
}
