//! # Brand Positioning from Interviews
//!
//! This crate turns stakeholder-interview documents into a Golden Circle
//! (Why, How, What) brand-positioning summary. It provides:
//!
//! - the request-scoped data model (`types`),
//! - the `DocumentExtractor` port implemented by extractor plugins (`extract`),
//! - AI providers and their factory (`providers`),
//! - Golden Circle sources and the interview processing pipeline (`branding`).

pub mod branding;
pub mod constants;
pub mod errors;
pub mod extract;
pub mod prompts;
pub mod providers;
pub mod types;

pub use branding::{BrandName, BrandingError, BrandingPipeline};
pub use errors::PromptError;
pub use extract::{DocumentExtractor, ExtractionError};
pub use types::{ExtractedText, GoldenCircle, GoldenCircleResponse, UploadedInterview};
