use std::path::Path;

/// File extensions accepted for upload (audio formats only).
/// Fixed at compile time and never mutated at runtime.
pub const ALLOWED_EXTENSIONS: [&str; 8] = ["mp3", "wav", "flac", "aac", "ogg", "wma", "m4a", "alac"];

/// Check whether a filename carries an allowed extension.
/// True iff the name contains at least one `.` and the lowercased text after
/// the final `.` is in [`ALLOWED_EXTENSIONS`].
pub fn allowed_file(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

/// Error type for filename validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilenameValidationError {
    Empty,
    ContainsNullByte,
    ContainsPathSeparator,
    IsSpecialDirectory,
    InvalidFileName,
}

impl FilenameValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            FilenameValidationError::Empty => "Filename cannot be empty",
            FilenameValidationError::ContainsNullByte => "Filename cannot contain null bytes",
            FilenameValidationError::ContainsPathSeparator => {
                "Filename cannot contain path separators (/ or \\)"
            }
            FilenameValidationError::IsSpecialDirectory => "Filename cannot be '.' or '..'",
            FilenameValidationError::InvalidFileName => {
                "Invalid filename: must be a valid file name"
            }
        }
    }
}

impl std::fmt::Display for FilenameValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for FilenameValidationError {}

/// Validate filename to prevent path traversal attacks
/// Checks if:
/// - Filename contains no path separators (/, \)
/// - Path::new(filename).file_name() returns Some(_)
/// - Filename is not empty
/// - Filename is not "." or ".."
pub fn validate_filename(filename: &str) -> Result<(), FilenameValidationError> {
    if filename.is_empty() {
        return Err(FilenameValidationError::Empty);
    }

    // Check for null bytes (not allowed in filenames)
    if filename.contains('\0') {
        return Err(FilenameValidationError::ContainsNullByte);
    }

    // Check for path separators
    if filename.contains('/') || filename.contains('\\') {
        return Err(FilenameValidationError::ContainsPathSeparator);
    }

    // Check for special directory names
    if filename == "." || filename == ".." {
        return Err(FilenameValidationError::IsSpecialDirectory);
    }

    // Ensure the name resolves to exactly itself as a file name component
    let path = Path::new(filename);
    if path.file_name().and_then(|n| n.to_str()) != Some(filename) {
        return Err(FilenameValidationError::InvalidFileName);
    }

    Ok(())
}
