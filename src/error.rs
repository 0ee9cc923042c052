use thiserror::Error;

/// sqlshift 統一エラー型
#[derive(Debug, Error)]
pub enum SqlshiftError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialize error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Target not found: {0}")]
    TargetNotFound(String),
}

pub type Result<T> = std::result::Result<T, SqlshiftError>;
