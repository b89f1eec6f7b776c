//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup. The state is immutable after construction and
//! holds the configuration plus the fully wired `BrandingPipeline`.

use crate::config::AppConfig;
use brandcircle::{
    branding::InferenceSource, providers::factory::create_provider, BrandingPipeline,
};
use brandcircle_pdf::PdfTextExtractor;
use std::sync::Arc;
use tracing::{info, warn};

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration, loaded from `config.yml`.
    pub config: Arc<AppConfig>,
    /// The interview processing pipeline shared by all requests.
    pub pipeline: Arc<BrandingPipeline>,
}

impl AppState {
    pub fn new(config: AppConfig, pipeline: BrandingPipeline) -> Self {
        Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
        }
    }
}

/// Builds the shared application state from the configuration.
///
/// The PDF extractor is always installed. An AI-backed source is added when
/// the `golden_circle_extraction` task names a provider defined under
/// `providers`; otherwise the service runs with the heuristic source only.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let pipeline = build_pipeline(&config)?;
    Ok(AppState::new(config, pipeline))
}

fn build_pipeline(config: &AppConfig) -> anyhow::Result<BrandingPipeline> {
    let pipeline = BrandingPipeline::new(Arc::new(PdfTextExtractor::new()));
    let task = config.golden_circle_task();

    let Some(provider_config) = config.providers.get(&task.provider) else {
        warn!(
            "AI provider '{}' is not configured. Golden Circles will be generated heuristically.",
            task.provider
        );
        return Ok(pipeline);
    };

    let ai_provider = create_provider(&task.provider, provider_config)?;
    let source = InferenceSource::with_prompts(ai_provider, task.system_prompt, task.user_prompt);
    info!(
        "Golden Circle extraction will use AI provider '{}' ({}, model '{}').",
        task.provider, provider_config.provider, provider_config.model_name
    );

    Ok(pipeline.with_primary_source(Arc::new(source)))
}
