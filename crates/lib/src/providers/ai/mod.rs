pub mod gemini;
pub mod local;

use crate::errors::PromptError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use reqwest::Client as ReqwestClient;
use std::fmt::Debug;
use std::time::Duration;

/// A trait for interacting with an AI provider.
///
/// This trait defines a common interface over different Large Language Models
/// (e.g., Gemini, local OpenAI-compatible servers).
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response from a given system and user prompt.
    ///
    /// The result should be a string containing the AI's response.
    async fn generate(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, PromptError>;
}

dyn_clone::clone_trait_object!(AiProvider);

/// Builds the HTTP client used by the providers. A call that exceeds
/// `timeout` fails with `PromptError::AiRequest`.
pub(crate) fn build_http_client(timeout: Duration) -> Result<ReqwestClient, PromptError> {
    ReqwestClient::builder()
        .timeout(timeout)
        .build()
        .map_err(PromptError::ReqwestClientBuild)
}
