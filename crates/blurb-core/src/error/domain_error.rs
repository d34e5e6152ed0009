//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Article not found: {0}")]
    ArticleNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Author password does not match")]
    AuthorPasswordMismatch,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ArticleNotFound(_) => "UNKNOWN_ARTICLE",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidTimestamp(_) => "INVALID_TIMESTAMP",

            Self::AuthorPasswordMismatch => "FORBIDDEN",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ArticleNotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidTimestamp(_))
    }

    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::AuthorPasswordMismatch)
    }
}
