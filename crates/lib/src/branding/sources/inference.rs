//! AI-backed Golden Circle extraction. Makes exactly one provider call per
//! request and reports every problem as a `SourceFailure`.

use super::{GeneratedGoldenCircle, GoldenCircleSource, SourceFailure, SourceKind};
use crate::{
    branding::brand_name::BrandName,
    prompts::golden_circle::{
        GOLDEN_CIRCLE_SYSTEM_PROMPT, GOLDEN_CIRCLE_USER_PROMPT, MARKDOWN_CONTENT_PLACEHOLDER,
    },
    providers::ai::AiProvider,
    types::{ExtractedText, GoldenCircle},
};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

/// The JSON object the model is asked to return.
#[derive(Deserialize, Debug)]
struct InferenceResponse {
    #[serde(default)]
    brand_name: Option<String>,
    golden_circle: GoldenCircle,
}

#[derive(Debug, Clone)]
pub struct InferenceSource {
    ai_provider: Box<dyn AiProvider>,
    system_prompt: String,
    user_prompt_template: String,
}

impl InferenceSource {
    /// Creates a source using the library's default prompts.
    pub fn new(ai_provider: Box<dyn AiProvider>) -> Self {
        Self::with_prompts(
            ai_provider,
            GOLDEN_CIRCLE_SYSTEM_PROMPT,
            GOLDEN_CIRCLE_USER_PROMPT,
        )
    }

    /// Creates a source with custom prompts. The user prompt template should
    /// contain `{markdown_content}`.
    pub fn with_prompts(
        ai_provider: Box<dyn AiProvider>,
        system_prompt: impl Into<String>,
        user_prompt_template: impl Into<String>,
    ) -> Self {
        Self {
            ai_provider,
            system_prompt: system_prompt.into(),
            user_prompt_template: user_prompt_template.into(),
        }
    }

    fn render_user_prompt(&self, text: &ExtractedText) -> String {
        self.user_prompt_template
            .replace(MARKDOWN_CONTENT_PLACEHOLDER, text.as_str())
    }
}

#[async_trait]
impl GoldenCircleSource for InferenceSource {
    fn kind(&self) -> SourceKind {
        SourceKind::ExternalInference
    }

    async fn generate(
        &self,
        text: &ExtractedText,
        _brand_hint: &BrandName,
    ) -> Result<GeneratedGoldenCircle, SourceFailure> {
        info!(
            "Requesting Golden Circle extraction for {} words of interview text.",
            text.word_count()
        );
        let user_prompt = self.render_user_prompt(text);
        let llm_response = self
            .ai_provider
            .generate(&self.system_prompt, &user_prompt)
            .await?;
        debug!("LLM Golden Circle response: {}", llm_response);

        parse_inference_response(&llm_response)
    }
}

/// Parses and validates the model's JSON answer.
pub(crate) fn parse_inference_response(
    llm_response: &str,
) -> Result<GeneratedGoldenCircle, SourceFailure> {
    let cleaned_response = strip_json_fence(llm_response);
    if cleaned_response.is_empty() {
        return Err(SourceFailure::MalformedOutput(
            "empty response".to_string(),
        ));
    }

    let parsed: InferenceResponse = serde_json::from_str(cleaned_response)
        .map_err(|e| SourceFailure::MalformedOutput(e.to_string()))?;

    if let Some(field) = parsed.golden_circle.first_blank_field() {
        return Err(SourceFailure::Incomplete(field));
    }

    let inferred_brand_name = parsed
        .brand_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());

    Ok(GeneratedGoldenCircle {
        golden_circle: parsed.golden_circle,
        inferred_brand_name,
    })
}

/// Removes an optional ```` ```json ```` (or bare ```` ``` ````) fence around the payload.
fn strip_json_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let without_prefix = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    without_prefix
        .strip_suffix("```")
        .unwrap_or(without_prefix)
        .trim()
}
