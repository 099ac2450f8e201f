use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FnolError {
    #[error("document is empty")]
    EmptyDocument,

    #[error("unsupported document type '{0}'. Supported: .pdf, .txt, .json")]
    UnsupportedFormat(String),

    #[error("failed to decode document: {0}")]
    Decode(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to load routing config from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("invalid routing config: {0}")]
    ConfigInvalid(String),

    #[error("invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
