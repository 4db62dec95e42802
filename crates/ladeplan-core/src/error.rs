use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LadeplanError {
    #[error("text extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("no carrier type selected. Select at least one carrier type (e.g. PB)")]
    EmptySelection,

    #[error("failed to load vocabulary from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("invalid vocabulary: {0}")]
    ConfigInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
