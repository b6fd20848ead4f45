// Rust guideline compliant 2026-10-12

//! Error types for the Tenure core library.

use thiserror::Error;

/// Result type alias for Tenure core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Tenure core operations.
///
/// Date parsing and status resolution never produce these; they cover
/// storage, validation and configuration only.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record failed validation before being written.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Record not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A row with this key already exists.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// Partial ID matched more than one record.
    #[error("Ambiguous ID: {0} matches {1:?}")]
    AmbiguousId(String, Vec<String>),

    /// A textual value could not be parsed into its typed form.
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Configuration file or environment override is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
