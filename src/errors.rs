//! Centralized error handling.
//!
//! Provides a unified error type for the entire application. Every
//! operation returns `AppResult<T>`; callers that only care about
//! success or failure use `result.is_ok()`.

use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Resource errors
    #[error("{0} already exists")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Serializable error body for callers that report failures as JSON
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),
            AppError::Conflict(msg) => format!("{} already exists", msg),

            // Hide details for internal/security errors
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }

    /// Whether the failure is a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, AppError::Conflict(_))
    }

    /// Convert into the serializable error body.
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        }
    }

    /// Classify a failed insert.
    ///
    /// Unique index violations become `Conflict`, foreign key violations
    /// become `Validation`; anything else stays a store error.
    pub fn from_write(entity: &str, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::warn!("{} rejected by unique index: {}", entity, detail);
                AppError::conflict(entity)
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                tracing::warn!("{} references a missing row: {}", entity, detail);
                AppError::validation(format!("{} references a missing user or topic", entity))
            }
            _ => AppError::Database(err),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

/// Format validation errors into a user-friendly string
pub fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    // field_errors() is backed by a HashMap
    messages.sort();
    messages.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_message_names_entity() {
        let err = AppError::conflict("User");
        assert_eq!(err.to_string(), "User already exists");
        assert_eq!(err.code(), "CONFLICT");
        assert!(err.is_conflict());
    }

    #[test]
    fn test_database_error_message_is_hidden() {
        let err = AppError::Database(DbErr::Custom("connection refused to 10.0.0.3".into()));
        let body = err.to_response();

        assert_eq!(body.error.code, "DATABASE_ERROR");
        assert!(!body.error.message.contains("10.0.0.3"));
    }

    #[test]
    fn test_unclassified_write_error_stays_database() {
        let err = AppError::from_write("Vote", DbErr::Custom("timeout".into()));
        assert!(matches!(err, AppError::Database(_)));
    }
}
