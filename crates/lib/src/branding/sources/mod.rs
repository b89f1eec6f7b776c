//! # Golden Circle Sources
//!
//! A `GoldenCircleSource` turns interview text into a Golden Circle. There are
//! two kinds: an AI-backed source (`InferenceSource`) and a deterministic
//! template source (`HeuristicSource`). The pipeline only sees the trait.

pub mod heuristic;
pub mod inference;

pub use heuristic::{fallback_golden_circle, HeuristicSource};
pub use inference::InferenceSource;

use crate::{
    branding::brand_name::BrandName,
    errors::PromptError,
    types::{ExtractedText, GoldenCircle},
};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Which kind of source produced a Golden Circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    ExternalInference,
    Heuristic,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::ExternalInference => f.write_str("external_inference"),
            SourceKind::Heuristic => f.write_str("heuristic"),
        }
    }
}

/// A Golden Circle plus the brand name the source inferred, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedGoldenCircle {
    pub golden_circle: GoldenCircle,
    pub inferred_brand_name: Option<String>,
}

/// Why a source could not produce a usable Golden Circle.
#[derive(Error, Debug)]
pub enum SourceFailure {
    #[error("AI provider call failed: {0}")]
    Provider(#[from] PromptError),
    #[error("Source returned malformed output: {0}")]
    MalformedOutput(String),
    #[error("Source returned an empty '{0}' field")]
    Incomplete(&'static str),
}

impl SourceFailure {
    /// A short, stable label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SourceFailure::Provider(_) => "provider",
            SourceFailure::MalformedOutput(_) => "malformed_output",
            SourceFailure::Incomplete(_) => "incomplete",
        }
    }
}

/// Produces a Golden Circle from interview text.
///
/// `brand_hint` is the best brand name known before generation (the override,
/// or the filename-derived name). Sources may use it in their output.
#[async_trait]
pub trait GoldenCircleSource: Send + Sync + fmt::Debug {
    fn kind(&self) -> SourceKind;

    async fn generate(
        &self,
        text: &ExtractedText,
        brand_hint: &BrandName,
    ) -> Result<GeneratedGoldenCircle, SourceFailure>;
}
