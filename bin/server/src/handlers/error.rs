use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::file_utils::FilenameValidationError;
use common::ErrorResponse;
use thiserror::Error;
use tracing::error;

/// Client errors on the upload path, surfaced as HTTP 400 with a JSON body
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("No file provided")]
    MissingFile,

    #[error("File type not allowed: {0}")]
    DisallowedType(String),

    #[error("Invalid filename: {0}")]
    InvalidName(#[from] FilenameValidationError),
}

impl ResponseError for UploadError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

/// Helper function for server errors
pub fn handle_server_error<E: std::fmt::Display>(msg: &str, e: E) -> actix_web::Error {
    error!("{}: {}", msg, e);
    actix_web::error::ErrorInternalServerError(format!("{}: {}", msg, e))
}
