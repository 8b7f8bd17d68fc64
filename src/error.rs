// Error types for the ValueBid application

use thiserror::Error;

/// Main error type for the ValueBid application
#[derive(Error, Debug)]
pub enum ValueBidError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Logging system errors
    #[error("Logging error: {0}")]
    Log(String),

    /// Server startup and shutdown errors
    #[error("Server error: {0}")]
    Server(String),

    /// I/O errors from standard library
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Timestamp parse errors
    #[error("Time parse error: {0}")]
    Time(#[from] chrono::ParseError),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ValueBidError>;
