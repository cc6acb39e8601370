//! Domain-level errors.
//!
//! These errors represent rejected input and failed lookups.
//! They are independent of infrastructure concerns (HTTP, serialization).

use thiserror::Error;
use validator::ValidationErrors;

use crate::validation::{collect_violations, summarize, FieldViolation};

/// Domain-specific errors.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// One or more fields broke their declared constraints
    #[error("Validation error: {}", summarize(.0))]
    InvalidFields(Vec<FieldViolation>),

    /// Entity not found
    #[error("Not found: {0}")]
    NotFound(String),
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>) -> Self {
        DomainError::NotFound(entity.into())
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        DomainError::InvalidFields(collect_violations(&errors))
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
