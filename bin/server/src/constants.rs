/// Directory holding uploaded files
pub const UPLOAD_DIR: &str = "uploads";

/// Directory holding daily request/upload logs
pub const LOG_DIR: &str = "logs";

/// Default server host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_PORT: &str = "5000";
