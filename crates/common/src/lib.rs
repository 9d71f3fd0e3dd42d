pub mod file_utils;

use serde::{Deserialize, Serialize};

/// Response returned after a successful upload
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UploadResponse {
    pub message: String,  // Fixed success message
    pub filename: String, // Filename the upload was stored under
}

/// Error body returned for rejected requests
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorResponse {
    pub error: String, // Human-readable reason
}

/// One entry in the `/files` listing
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String, // Filename in the storage root
    pub time: String, // Last-modified time, DD/MM/YYYY HH:MM:SS local
}
