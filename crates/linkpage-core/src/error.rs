//! Error types for linkpage

use thiserror::Error;

use crate::types::ServiceId;

/// Main error type for linkpage operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// Navigation targeted a service that is not in the services map
    #[error("Unknown service: {0}")]
    InvalidViewReference(ServiceId),

    /// The configuration seed is malformed or inconsistent
    #[error("Config error: {0}")]
    Config(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;
