//! Error types for rusty-rates

use thiserror::Error;

/// Main error type for rusty-rates
#[derive(Error, Debug)]
pub enum RatesError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Error status: {status}, for {url}")]
    Http { status: u16, url: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type alias for rusty-rates operations
pub type Result<T> = std::result::Result<T, RatesError>;
