//! Custom error types for pubmed-papers.
//!
//! This module defines all error types used throughout the application.
//! All functions return `Result<T, PubmedError>` instead of using `unwrap()`.

use thiserror::Error;

/// Main error type for pubmed-papers operations.
///
/// Uses `thiserror` for ergonomic error handling and automatic `Display` implementation.
#[derive(Debug, Error)]
pub enum PubmedError {
    /// Network/HTTP request error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// E-utilities endpoint returned a non-success status
    #[error("API error: {code} - {message}")]
    Api {
        /// HTTP status code from the endpoint
        code: i32,
        /// Error message from the endpoint
        message: String,
    },

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias using `PubmedError`
pub type Result<T> = std::result::Result<T, PubmedError>;
