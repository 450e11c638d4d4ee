//! Error types for podium

use thiserror::Error;

/// Main error type for podium operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Asset load error: {0}")]
    Load(String),

    #[error("GPU error: {0}")]
    Gpu(String),

    #[error("Visualization error: {0}")]
    Visualization(String),
}

/// Result type alias for podium operations
pub type Result<T> = std::result::Result<T, Error>;
