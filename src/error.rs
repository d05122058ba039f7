//! Error types for chat-stats.
//!
//! The analysis itself never fails; these errors come from the layers around
//! it (reading logs, loading configuration, serializing reports).

use thiserror::Error;

/// Common error type for chat-stats.
#[derive(Error, Debug)]
pub enum ChatStatsError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Validation error for configuration values or CLI arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Report serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for chat-stats operations.
pub type Result<T> = std::result::Result<T, ChatStatsError>;
