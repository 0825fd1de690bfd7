//! Common error types for Courtside

use thiserror::Error;

/// Common result type for Courtside operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the shared layers (store access, configuration).
/// Request handlers carry their own response-shaped error enums and do
/// not funnel through this type.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
