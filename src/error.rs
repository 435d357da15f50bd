//! Error types / 错误类型

use thiserror::Error;

/// Catalog loading errors, fatal at startup / 食物目录加载错误（启动时致命）
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog entry at index {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },
}

/// Session attribute validation errors / 会话属性校验错误
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Malformed session attributes: {0}")]
    MalformedAttributes(String),
}

/// Turn-level errors, always recovered with a spoken fallback / 对话轮次错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkillError {
    #[error("No pending results to continue")]
    NoPendingResults,

    #[error("Query contains no searchable words")]
    EmptyQuery,

    #[error("Invalid turn: {0}")]
    InvalidTurn(String),
}

pub type Result<T> = std::result::Result<T, SkillError>;
