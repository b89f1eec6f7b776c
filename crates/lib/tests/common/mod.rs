#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Shared mocks for the library's integration tests, keeping them isolated
//! from real AI providers and real PDF parsing.

use async_trait::async_trait;
use brandcircle::{
    branding::{BrandName, GeneratedGoldenCircle, GoldenCircleSource, SourceFailure, SourceKind},
    providers::ai::AiProvider,
    DocumentExtractor, ExtractedText, ExtractionError, PromptError,
};
use dotenvy::dotenv;
use std::fmt::Debug;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Once, RwLock,
};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();
    });
}

// --- Mock AI Provider ---

/// Replays queued responses in order. An `Err` entry simulates a provider failure.
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    pub call_history: Arc<RwLock<Vec<(String, String)>>>,
    pub responses: Arc<RwLock<Vec<Result<String, String>>>>,
}

impl MockAiProvider {
    pub fn new(responses: Vec<Result<String, String>>) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            responses: Arc::new(RwLock::new(responses.into_iter().rev().collect())),
        }
    }

    pub fn answering(response: &str) -> Self {
        Self::new(vec![Ok(response.to_string())])
    }

    pub fn failing(message: &str) -> Self {
        Self::new(vec![Err(message.to_string())])
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.call_history.read().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, PromptError> {
        self.call_history
            .write()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));

        match self.responses.write().unwrap().pop() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(PromptError::AiApi(message)),
            None => Err(PromptError::AiApi("MockAiProvider: no response queued".to_string())),
        }
    }
}

// --- Mock Extractor ---

/// Returns fixed text, or fails the way a real extractor would on empty input.
#[derive(Debug, Default)]
pub struct ScriptedExtractor {
    text: String,
    pub calls: AtomicUsize,
}

impl ScriptedExtractor {
    pub fn returning(text: &str) -> Self {
        Self {
            text: text.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentExtractor for ScriptedExtractor {
    async fn extract(&self, data: &[u8]) -> Result<ExtractedText, ExtractionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if data.is_empty() {
            return Err(ExtractionError::EmptyPayload);
        }
        Ok(ExtractedText::new(self.text.clone()))
    }
}

// --- Mock Sources ---

/// A primary source that always fails, counting its invocations.
#[derive(Debug, Default)]
pub struct FailingSource {
    pub calls: AtomicUsize,
}

impl FailingSource {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GoldenCircleSource for FailingSource {
    fn kind(&self) -> SourceKind {
        SourceKind::ExternalInference
    }

    async fn generate(
        &self,
        _text: &ExtractedText,
        _brand_hint: &BrandName,
    ) -> Result<GeneratedGoldenCircle, SourceFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(SourceFailure::MalformedOutput("service unavailable".to_string()))
    }
}

pub const INTERVIEW_TEXT: &str = "Q: What is your company's mission?\nA: We exist to help small businesses thrive through technology.\n\nQ: What are your values?\nA: Innovation, integrity, and customer success.";

pub const INFERRED_JSON: &str = r#"{"brand_name": "TechHelper", "golden_circle": {"why": "We exist to help small businesses thrive.", "how": "Through innovation, integrity and customer success.", "what": "We build approachable software for small businesses."}}"#;
