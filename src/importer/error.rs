// ==========================================
// Pre-sale Unit Inventory - Import Error Types
// ==========================================
// Tool: thiserror derive macro
// Note: row-level validation outcomes are data (domain::InvalidRow),
// not errors; this enum covers hard failures only
// ==========================================

use thiserror::Error;

/// Hard failures of the import pipeline and its remote submission.
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== File input errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (only .csv/.txt are accepted)")]
    UnsupportedFormat(String),

    #[error("file too large: {size} bytes (limit {limit})")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("file read failed: {0}")]
    FileReadError(String),

    // ===== Submission preconditions =====
    #[error("nothing to import: the batch contains no valid rows")]
    EmptyBatch,

    #[error("{0} row(s) still have validation errors; fix them before submitting")]
    ValidationPending(usize),

    // ===== Remote request-level failures =====
    // All of these void the whole batch attempt; per-row rejections come
    // back inside a successful ImportReport instead.
    #[error("request failed: {0}")]
    Transport(String),

    #[error("rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("request rejected by server: {0}")]
    RemoteValidation(String),

    #[error("server error (status {status}): {message}")]
    Server { status: u16, message: String },

    #[error("unexpected response shape: {0}")]
    InvalidResponse(String),

    // ===== Generic =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<reqwest::Error> for ImportError {
    fn from(err: reqwest::Error) -> Self {
        ImportError::Transport(err.to_string())
    }
}

/// Result type alias
pub type ImportResult<T> = Result<T, ImportError>;
