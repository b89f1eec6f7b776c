//! Template-based Golden Circle generation, used when AI inference is
//! unavailable or fails. The output is parameterized by the brand name only.

use super::{GeneratedGoldenCircle, GoldenCircleSource, SourceFailure, SourceKind};
use crate::{
    branding::brand_name::BrandName,
    types::{ExtractedText, GoldenCircle},
};
use async_trait::async_trait;
use tracing::debug;

/// Builds the placeholder Golden Circle for `brand_name`.
///
/// Never fails and never returns an empty field. The interview text is not
/// read; it only needs to have been extracted upstream.
pub fn fallback_golden_circle(_text: &ExtractedText, brand_name: &BrandName) -> GoldenCircle {
    GoldenCircle {
        why: format!(
            "We believe that businesses like {brand_name} should create meaningful impact by solving real problems and empowering their customers to achieve their goals."
        ),
        how: "Our approach focuses on innovative solutions and a clear process: we listen, iterate, and deliver with high quality standards and reliable service. This method builds genuine relationships with customers through transparency.".to_string(),
        what: format!(
            "{brand_name} provides professional services and solutions that help clients streamline their operations and grow their business effectively."
        ),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicSource;

#[async_trait]
impl GoldenCircleSource for HeuristicSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Heuristic
    }

    async fn generate(
        &self,
        text: &ExtractedText,
        brand_hint: &BrandName,
    ) -> Result<GeneratedGoldenCircle, SourceFailure> {
        debug!(
            word_count = text.word_count(),
            brand = %brand_hint,
            "Generating heuristic Golden Circle"
        );
        Ok(GeneratedGoldenCircle {
            golden_circle: fallback_golden_circle(text, brand_hint),
            inferred_brand_name: None,
        })
    }
}
