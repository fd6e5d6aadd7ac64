//! Error types for game data extraction.

use thiserror::Error;

/// Errors that can occur while loading exported game data.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The export is not valid JSON or has the wrong shape.
    #[error("invalid game data: {0}")]
    Json(#[from] serde_json::Error),

    /// The export file does not exist.
    #[error("game data file not found: {0}")]
    NotFound(String),
}

/// Result type for game data operations.
pub type Result<T> = std::result::Result<T, Error>;
