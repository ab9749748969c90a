//! Error types for tick

use thiserror::Error;

/// Main error type for tick
#[derive(Error, Debug)]
pub enum TickError {
    /// The duration token is not an integer, or is not greater than zero
    #[error("{0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, TickError>;
