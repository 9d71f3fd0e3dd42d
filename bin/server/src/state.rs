//! Server application state

use crate::request_log::DailyLogger;
use storage::FilesystemStorage;

/// Shared per-application state handed to every handler
pub struct AppState {
    pub storage: FilesystemStorage,
    pub request_log: DailyLogger,
}

impl AppState {
    pub fn new(storage: FilesystemStorage, request_log: DailyLogger) -> Self {
        Self {
            storage,
            request_log,
        }
    }
}
