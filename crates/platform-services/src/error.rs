//! Error types for lifecycle operations
//!
//! This module defines the error taxonomy shared by every lifecycle
//! service. Each error carries a stable kind plus a human-readable reason
//! sufficient to render an HTTP-equivalent status without the core knowing
//! about HTTP.

use thiserror::Error;

use platform_company::SlugError;
use platform_policy::DenialReason;

use crate::collaborators::BlobError;
use crate::repository::RepositoryError;

/// Lifecycle error types.
///
/// Services never swallow repository errors: storage-specific conflict
/// signals are translated into [`ServiceError::Conflict`], everything else
/// propagates unchanged. No operation is retried by the core; retry policy
/// belongs to the caller.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A referenced entity does not exist
    #[error("{entity} not found")]
    NotFound {
        /// Which entity was missing (e.g. "company", "job")
        entity: &'static str,
    },

    /// Authorization denied; carries the rule that failed
    #[error("forbidden: {0}")]
    Forbidden(#[from] DenialReason),

    /// Structurally valid request that violates a business invariant
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Uniqueness violation (duplicate application, slug collision, ...)
    #[error("conflict: {0}")]
    Conflict(String),

    /// Malformed payload (e.g. an email with no domain part)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Storage or blob-store failure unrelated to the request itself
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type for lifecycle operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Shorthand for a missing entity.
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    /// Get the HTTP-equivalent status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::NotFound { .. } => 404,
            ServiceError::Forbidden(_) => 403,
            ServiceError::InvalidOperation(_) => 422,
            ServiceError::Conflict(_) => 409,
            ServiceError::InvalidInput(_) => 400,
            ServiceError::Storage(_) => 500,
        }
    }

    /// Get the stable error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::NotFound { .. } => "NOT_FOUND",
            ServiceError::Forbidden(reason) => reason.as_str(),
            ServiceError::InvalidOperation(_) => "INVALID_OPERATION",
            ServiceError::Conflict(_) => "CONFLICT",
            ServiceError::InvalidInput(_) => "INVALID_INPUT",
            ServiceError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Get the denied rule, if this is an authorization failure.
    pub fn denial_reason(&self) -> Option<DenialReason> {
        match self {
            ServiceError::Forbidden(reason) => Some(*reason),
            _ => None,
        }
    }

    /// Check if this error should be logged at error level.
    ///
    /// Denials and conflicts are expected outcomes of normal traffic.
    pub fn is_server_error(&self) -> bool {
        matches!(self, ServiceError::Storage(_))
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict(detail) => ServiceError::Conflict(detail),
            RepositoryError::NotFound => ServiceError::not_found("record"),
            RepositoryError::Unavailable(detail) => ServiceError::Storage(detail),
        }
    }
}

impl From<SlugError> for ServiceError {
    fn from(err: SlugError) -> Self {
        ServiceError::InvalidInput(err.to_string())
    }
}

impl From<BlobError> for ServiceError {
    fn from(err: BlobError) -> Self {
        ServiceError::Storage(err.to_string())
    }
}
