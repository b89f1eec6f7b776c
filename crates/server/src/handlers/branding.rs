//! # Branding Handlers
//!
//! Handlers for the `/api/v1/branding` routes: Golden Circle creation from an
//! uploaded interview PDF, plus the health and supported-formats accessors.

use super::{AppError, AppState};
use axum::{extract::State, Json};
use axum_extra::extract::{
    multipart::{MultipartError, MultipartRejection},
    Multipart,
};
use brandcircle::{
    types::{HealthStatus, SupportedFormats},
    GoldenCircleResponse, UploadedInterview,
};
use tracing::{info, warn};

const INTERVIEW_FILE_FIELD: &str = "interview_file";
const BRAND_NAME_FIELD: &str = "brand_name";

/// Handler for `POST /api/v1/branding/create-from-interview`.
///
/// Expects a multipart form with a required `interview_file` part and an
/// optional `brand_name` text field, in any order.
pub async fn create_from_interview_handler(
    State(app_state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<GoldenCircleResponse>, AppError> {
    let mut multipart = multipart?;
    let max_upload_mb = app_state.config.max_upload_mb;
    let read_error = |err: MultipartError| AppError::from_multipart(err, max_upload_mb);
    let mut interview: Option<UploadedInterview> = None;
    let mut brand_name: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(read_error)? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            INTERVIEW_FILE_FIELD => {
                let filename = field.file_name().map(str::to_string);
                let content_type = field.content_type().unwrap_or("").to_string();
                let data = field.bytes().await.map_err(read_error)?.to_vec();
                info!(
                    "Received interview upload: {:?} ({}, {} bytes)",
                    filename,
                    content_type,
                    data.len()
                );
                interview = Some(UploadedInterview::new(filename, content_type, data));
            }
            BRAND_NAME_FIELD => {
                let value = field.text().await.map_err(read_error)?;
                brand_name = Some(value).filter(|v| !v.is_empty());
            }
            other => warn!("Ignoring unexpected multipart field '{}'", other),
        }
    }

    let interview = interview.ok_or(AppError::MissingFile)?;
    let response = app_state
        .pipeline
        .produce_golden_circle(interview, brand_name.as_deref())
        .await?;

    Ok(Json(response))
}

/// Handler for `GET /api/v1/branding/health`.
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}

/// Handler for `GET /api/v1/branding/supported-formats`.
pub async fn supported_formats_handler(
    State(app_state): State<AppState>,
) -> Json<SupportedFormats> {
    Json(SupportedFormats::for_upload_limit(
        app_state.config.max_upload_mb,
    ))
}
