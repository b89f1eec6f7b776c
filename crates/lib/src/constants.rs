//! # Shared Constants
//!
//! Values shared by the library, the PDF plugin and the server, kept in one
//! place to avoid "magic strings".

/// The only media type accepted for interview uploads.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// The file extension advertised for interview uploads.
pub const PDF_EXTENSION: &str = ".pdf";

/// The default upload limit, in mebibytes.
pub const DEFAULT_MAX_UPLOAD_MB: usize = 10;

/// The number of characters kept in an extracted-text preview.
pub const CONTENT_PREVIEW_CHARS: usize = 200;

/// Used when neither an override, an inferred name, nor the filename yields a brand name.
pub const UNNAMED_BRAND: &str = "Unnamed Brand";

/// The service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "branding";

/// The task key for Golden Circle extraction in the server configuration.
pub const GOLDEN_CIRCLE_TASK: &str = "golden_circle_extraction";

/// How long an AI provider call may take before it counts as failed.
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 60;
