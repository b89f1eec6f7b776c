use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::multipart::{MultipartError, MultipartRejection};
use brandcircle::BrandingError;
use serde_json::json;
use tracing::{error, warn};

/// A custom error type for the server application.
///
/// Every variant renders as `{"detail": "<text>"}` with a matching status code.
#[derive(Debug)]
pub enum AppError {
    /// Errors from the interview processing pipeline.
    Branding(BrandingError),
    /// The request had no `interview_file` part.
    MissingFile,
    /// The multipart body could not be read.
    Multipart { status: StatusCode, message: String },
    /// The upload exceeded the configured limit.
    PayloadTooLarge { max_upload_mb: usize },
}

impl From<BrandingError> for AppError {
    fn from(err: BrandingError) -> Self {
        AppError::Branding(err)
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::Multipart {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: rejection.body_text(),
        }
    }
}

impl AppError {
    /// Maps an error raised while reading multipart fields. Hitting the body
    /// limit becomes `PayloadTooLarge`; anything else is unprocessable.
    pub fn from_multipart(err: MultipartError, max_upload_mb: usize) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::PayloadTooLarge { max_upload_mb };
        }
        AppError::Multipart {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: err.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, detail) = match self {
            AppError::Branding(err) if err.is_client_error() => {
                warn!("Rejected interview upload: {}", err);
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            AppError::Branding(err) => {
                error!("Golden Circle creation failed: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error during Golden Circle creation".to_string(),
                )
            }
            AppError::MissingFile => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Field required: interview_file".to_string(),
            ),
            AppError::PayloadTooLarge { max_upload_mb } => {
                warn!("Rejected upload over the {}MB limit", max_upload_mb);
                (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    format!("File too large. Maximum size is {max_upload_mb}MB"),
                )
            }
            AppError::Multipart { status, message } => {
                warn!("Invalid multipart request ({}): {}", status, message);
                (status, message)
            }
        };

        let body = Json(json!({
            "detail": detail,
        }));

        (status_code, body).into_response()
    }
}
