//! Error types for Agora.

use thiserror::Error;

/// Common error type for Agora.
#[derive(Error, Debug)]
pub enum AgoraError {
    /// A post creation referenced a board slug that is not in the catalog.
    #[error("unknown board: {0}")]
    UnknownBoard(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Agora operations.
pub type Result<T> = std::result::Result<T, AgoraError>;
