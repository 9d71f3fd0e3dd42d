//! Daily request/upload log
//!
//! Domain logging, separate from the tracing diagnostics: one text file per
//! calendar day under the log root, one line per request and one line per
//! successful upload. Every write opens the file in append mode and drops
//! the handle, so lines stay intact under concurrent writers and the day
//! rollover needs no state.

use crate::state::AppState;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::web;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::warn;

/// Append-only logger writing to `<log-root>/<DDMMYYYY>.log`
pub struct DailyLogger {
    log_dir: PathBuf,
}

impl DailyLogger {
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
        }
    }

    /// Create the log root if it does not exist yet
    pub fn ensure_dir(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.log_dir)
    }

    /// Path of the log file for the current local date
    pub fn log_file_path(&self) -> PathBuf {
        let filename = Local::now().format("%d%m%Y").to_string();
        self.log_dir.join(format!("{}.log", filename))
    }

    /// Record one handled request
    pub fn log_request(&self, method: &str, path: &str, addr: &str) -> io::Result<()> {
        self.append_line(&format!("Request {} {} from {}", method, path, addr))
    }

    /// Record one successful upload
    pub fn log_upload(&self, filename: &str) -> io::Result<()> {
        self.append_line(&format!("\"{}\" uploaded!", filename))
    }

    fn append_line(&self, message: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.log_file_path())?;
        writeln!(
            file,
            "{} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            message
        )
    }
}

/// Resolve the client address for a request: first entry of X-Forwarded-For
/// when present, otherwise the direct peer address.
pub fn client_addr(req: &ServiceRequest) -> String {
    let forwarded = req
        .headers()
        .get("X-Forwarded-For")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|entry| !entry.is_empty());

    match forwarded {
        Some(entry) => entry.to_string(),
        None => req
            .peer_addr()
            .map(|peer| peer.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string()),
    }
}

/// Middleware run before every dispatch, regardless of route. Best effort:
/// a log write failure must never fail the request itself.
pub async fn log_request_entry(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    if let Some(state) = req.app_data::<web::Data<AppState>>() {
        let addr = client_addr(&req);
        if let Err(e) = state
            .request_log
            .log_request(req.method().as_str(), req.path(), &addr)
        {
            warn!("Failed to write request log: {}", e);
        }
    }

    next.call(req).await
}
