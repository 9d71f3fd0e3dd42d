//! Filesystem-based upload storage
//!
//! A flat directory keyed by filename. The directory listing is the sole
//! source of truth: there is no in-memory index, and a file uploaded twice
//! under the same name is overwritten in place (last write wins).

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::SystemTime;

/// Flat-directory storage for uploaded files
pub struct FilesystemStorage {
    upload_dir: PathBuf,
}

impl FilesystemStorage {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
        }
    }

    /// Storage root path
    pub fn upload_dir(&self) -> &PathBuf {
        &self.upload_dir
    }

    /// Create the storage root if it does not exist yet
    pub async fn ensure_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .context("Failed to create upload directory")
    }

    fn file_path(&self, filename: &str) -> PathBuf {
        self.upload_dir.join(filename)
    }

    /// Write a file into the storage root, replacing any existing file of
    /// the same name
    pub async fn store_file(&self, filename: &str, content: &[u8]) -> Result<()> {
        let file_path = self.file_path(filename);
        tokio::fs::write(&file_path, content)
            .await
            .with_context(|| format!("Failed to write file: {:?}", file_path))?;
        Ok(())
    }

    /// Read a stored file back
    pub async fn read_file(&self, filename: &str) -> Result<Vec<u8>> {
        let file_path = self.file_path(filename);
        tokio::fs::read(&file_path)
            .await
            .with_context(|| format!("Failed to read file: {:?}", file_path))
    }

    /// Enumerate every direct entry of the storage root with its
    /// last-modified time. Non-recursive, no filtering; order is whatever
    /// the directory iteration yields.
    pub async fn list_files(&self) -> Result<Vec<(String, SystemTime)>> {
        let mut entries = tokio::fs::read_dir(&self.upload_dir)
            .await
            .context("Failed to read upload directory")?;

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .context("Failed to read directory entry")?
        {
            let name = entry.file_name().to_string_lossy().into_owned();
            let modified = entry
                .metadata()
                .await
                .with_context(|| format!("Failed to stat entry: {}", name))?
                .modified()
                .with_context(|| format!("No modification time for entry: {}", name))?;
            files.push((name, modified));
        }

        Ok(files)
    }
}
