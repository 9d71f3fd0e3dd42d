use crate::handlers::error::handle_server_error;
use crate::state::AppState;
use actix_web::{get, web, HttpResponse, Result as ActixResult};
use chrono::{DateTime, Local};
use common::FileEntry;

/// List every entry in the storage root with its last-modified time
#[get("/files")]
pub async fn get_files(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let listed = state
        .storage
        .list_files()
        .await
        .map_err(|e| handle_server_error("Failed to list uploads", e))?;

    let mut files: Vec<FileEntry> = listed
        .into_iter()
        .map(|(name, modified)| FileEntry {
            name,
            time: DateTime::<Local>::from(modified)
                .format("%d/%m/%Y %H:%M:%S")
                .to_string(),
        })
        .collect();

    // Sort by name for deterministic order
    files.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(HttpResponse::Ok().json(files))
}
