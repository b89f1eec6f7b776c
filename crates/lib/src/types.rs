//! # Core Data Types
//!
//! Request-scoped value objects that flow through the interview pipeline, and
//! the wire-level response shapes returned by the branding endpoints.

use crate::constants::{
    CONTENT_PREVIEW_CHARS, DEFAULT_AI_TIMEOUT_SECS, PDF_EXTENSION, PDF_MIME_TYPE, SERVICE_NAME,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

// --- Input ---

/// An uploaded interview document, as handed over by the HTTP layer.
#[derive(Debug, Clone, Default)]
pub struct UploadedInterview {
    /// The client-supplied filename, if the upload carried one.
    pub filename: Option<String>,
    /// The declared media type of the file part.
    pub content_type: String,
    /// The raw file bytes.
    pub data: Vec<u8>,
}

impl UploadedInterview {
    pub fn new(
        filename: Option<String>,
        content_type: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            filename,
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    /// Convenience constructor for a PDF upload.
    pub fn pdf(filename: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self::new(Some(filename.into()), PDF_MIME_TYPE, data)
    }
}

/// Text produced by a document extractor. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    content: String,
}

impl ExtractedText {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    /// The first 200 characters, followed by `...` when the text is longer.
    pub fn preview(&self) -> String {
        if self.char_count() > CONTENT_PREVIEW_CHARS {
            let head: String = self.content.chars().take(CONTENT_PREVIEW_CHARS).collect();
            format!("{head}...")
        } else {
            self.content.clone()
        }
    }
}

impl From<String> for ExtractedText {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

// --- Output ---

/// The Golden Circle framework: Why, How, What.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldenCircle {
    /// The purpose, belief, or cause: why the brand exists.
    pub why: String,
    /// The process or values: how the brand fulfills its purpose.
    pub how: String,
    /// The products or services: what the brand actually does.
    pub what: String,
}

impl GoldenCircle {
    /// Returns the name of the first blank field, if any.
    pub fn first_blank_field(&self) -> Option<&'static str> {
        [("why", &self.why), ("how", &self.how), ("what", &self.what)]
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
    }
}

/// Raised when a response cannot be assembled into a conformant shape.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("brand_name must not be empty")]
    EmptyBrandName,
    #[error("golden_circle.{0} must not be empty")]
    EmptyField(&'static str),
}

/// The sole response body of `POST /api/v1/branding/create-from-interview`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldenCircleResponse {
    pub brand_name: String,
    pub golden_circle: GoldenCircle,
}

impl GoldenCircleResponse {
    /// Assembles a response, rejecting an empty brand name or a blank Golden Circle field.
    pub fn assemble(
        brand_name: impl Into<String>,
        golden_circle: GoldenCircle,
    ) -> Result<Self, AssemblyError> {
        let brand_name = brand_name.into();
        if brand_name.is_empty() {
            return Err(AssemblyError::EmptyBrandName);
        }
        if let Some(field) = golden_circle.first_blank_field() {
            return Err(AssemblyError::EmptyField(field));
        }
        Ok(Self {
            brand_name,
            golden_circle,
        })
    }
}

// --- Capability surface ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedFormat {
    pub extension: String,
    pub mime_type: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedFormats {
    pub supported_formats: Vec<SupportedFormat>,
    pub max_file_size: String,
    pub encoding: String,
}

impl SupportedFormats {
    /// The formats accepted for interview uploads, given the upload limit in MiB.
    pub fn for_upload_limit(max_upload_mb: usize) -> Self {
        Self {
            supported_formats: vec![SupportedFormat {
                extension: PDF_EXTENSION.to_string(),
                mime_type: PDF_MIME_TYPE.to_string(),
                description: "PDF documents".to_string(),
            }],
            max_file_size: format!("{max_upload_mb}MB"),
            encoding: "UTF-8".to_string(),
        }
    }
}

// --- Configuration ---

/// A reusable configuration for a specific AI provider instance.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    /// The type of provider ("gemini" or "local").
    pub provider: String,
    /// The API URL. Optional for Gemini, where it is derived from the model name.
    #[serde(default)]
    pub api_url: Option<String>,
    /// The API key, which can be null for local providers.
    #[serde(default)]
    pub api_key: Option<String>,
    pub model_name: String,
    /// Request timeout in seconds. Defaults to 60.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ProviderConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_AI_TIMEOUT_SECS))
    }
}
