use crate::handlers::error::{handle_server_error, UploadError};
use crate::state::AppState;
use actix_multipart::form::{tempfile::TempFile, MultipartForm};
use actix_web::{post, web, HttpResponse, Result as ActixResult};
use common::{file_utils, UploadResponse};
use tracing::{info, warn};

/// Multipart form for file upload
#[derive(MultipartForm)]
pub struct UploadForm {
    /// The file being uploaded; `None` when the client sent no `file` part
    pub file: Option<TempFile>,
}

/// Handle file upload (multipart/form-data)
#[post("/upload")]
pub async fn upload(
    form: MultipartForm<UploadForm>,
    state: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let file = form.into_inner().file.ok_or(UploadError::MissingFile)?;
    // A part without a filename behaves like an empty name and falls through
    // the extension gate below
    let filename = file.file_name.clone().unwrap_or_default();

    // Debug formatter (?) escapes control characters in client-supplied names
    info!(filename = ?filename, "POST /upload - Request received");

    if !file_utils::allowed_file(&filename) {
        return Err(UploadError::DisallowedType(filename).into());
    }

    file_utils::validate_filename(&filename).map_err(UploadError::InvalidName)?;

    // Read file content from temp file
    let content = std::fs::read(file.file.path())
        .map_err(|e| handle_server_error("Failed to read uploaded file", e))?;

    state
        .storage
        .store_file(&filename, &content)
        .await
        .map_err(|e| handle_server_error("Failed to store file", e))?;

    // Best effort: a log write failure must not fail the upload
    if let Err(e) = state.request_log.log_upload(&filename) {
        warn!("Failed to write upload log: {}", e);
    }

    info!(
        filename = ?filename,
        size = content.len(),
        "POST /upload - File uploaded"
    );

    Ok(HttpResponse::Ok().json(UploadResponse {
        message: "File uploaded successfully".to_string(),
        filename,
    }))
}
