//! # AI Provider Factory
//!
//! Builds AI provider instances from named `ProviderConfig` entries. Keeping
//! this in the library lets any consumer (server, tests) construct providers
//! the same way.

use crate::{
    errors::PromptError,
    providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider},
    types::ProviderConfig,
};
use tracing::info;

/// Instantiates the AI provider described by `provider_config`.
///
/// - `gemini` requires an `api_key`; the URL is derived from the model name
///   when not configured.
/// - `local` requires an `api_url` pointing at an OpenAI-compatible
///   chat-completions endpoint.
///
/// Both use `timeout_secs` as the request timeout.
pub fn create_provider(
    name: &str,
    provider_config: &ProviderConfig,
) -> Result<Box<dyn AiProvider>, PromptError> {
    let provider: Box<dyn AiProvider> = match provider_config.provider.as_str() {
        "gemini" => {
            let api_key = provider_config
                .api_key
                .clone()
                .filter(|key| !key.is_empty())
                .ok_or_else(|| {
                    PromptError::MissingAiProvider(format!(
                        "api_key is required for gemini provider '{name}'"
                    ))
                })?;
            let api_url = provider_config
                .api_url
                .clone()
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| GeminiProvider::default_api_url(&provider_config.model_name));
            info!("Configuring Gemini provider '{}' with URL: {}", name, api_url);
            Box::new(GeminiProvider::with_timeout(
                api_url,
                api_key,
                provider_config.request_timeout(),
            )?)
        }
        "local" => {
            let api_url = provider_config
                .api_url
                .clone()
                .filter(|url| !url.is_empty())
                .ok_or_else(|| {
                    PromptError::MissingAiProvider(format!(
                        "api_url is required for local provider '{name}'. Please set LOCAL_AI_API_URL in your .env file."
                    ))
                })?;
            info!("Configuring local AI provider '{}' with URL: {}", name, api_url);
            Box::new(LocalAiProvider::with_timeout(
                api_url,
                provider_config.api_key.clone(),
                Some(provider_config.model_name.clone()),
                provider_config.request_timeout(),
            )?)
        }
        other => {
            return Err(PromptError::MissingAiProvider(format!(
                "Unsupported AI provider type '{other}' for provider '{name}'"
            )));
        }
    };

    Ok(provider)
}
