// Rust guideline compliant 2026-10-12

//! Error handling for Tenure application services.

use serde::Serialize;
use std::path::PathBuf;
use tenure_core::Error as CoreError;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for JSON responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested record was not found.
    NotFound,
    /// The provided identifier matched multiple records.
    AmbiguousId,
    /// A record failed validation.
    ValidationError,
    /// The request included invalid inputs.
    InvalidInput,
    /// The operation conflicts with existing records.
    Conflict,
    /// Configuration could not be loaded.
    ConfigError,
    /// IO failure while reading or writing workspace data.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// The workspace has not been initialized.
    WorkspaceNotInitialized,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Workspace directory is missing.
    #[error("Tenure workspace not initialized at {path}. Run 'tenure init' first.")]
    WorkspaceNotInitialized {
        /// Path where `.tenure` was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The operation would break a relation between records.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::WorkspaceNotInitialized { .. } => ErrorCode::WorkspaceNotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Conflict(_) => ErrorCode::Conflict,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::AmbiguousId(_, _) => ErrorCode::AmbiguousId,
                CoreError::DuplicateKey(_) => ErrorCode::Conflict,
                CoreError::InvalidRecord(_) => ErrorCode::ValidationError,
                CoreError::InvalidValue(_) => ErrorCode::InvalidInput,
                CoreError::InvalidConfig(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::WorkspaceNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Core(CoreError::AmbiguousId(partial, matches)) => Some(serde_json::json!({
                "partial": partial,
                "matches": matches,
            })),
            _ => None,
        }
    }
}
