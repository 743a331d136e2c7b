//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    InvalidFormat,
    InvalidSetup,
    UnknownElement,
    UnknownMatrix,
    DuplicateMatrix,
    InvalidScaleValue,
    InvalidDiagonal,
    ReciprocityViolation,
    ConflictingJudgment,

    // Completeness errors
    MissingJudgment,
    IncompleteMatrix,
    MissingCriterionMatrix,
    InconsistentAlternativeSet,

    // Computation errors
    SingularOrDegenerateMatrix,

    // Not found errors
    RunNotFound,

    // Infrastructure errors
    StorageError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidSetup => "INVALID_SETUP",
            ErrorCode::UnknownElement => "UNKNOWN_ELEMENT",
            ErrorCode::UnknownMatrix => "UNKNOWN_MATRIX",
            ErrorCode::DuplicateMatrix => "DUPLICATE_MATRIX",
            ErrorCode::InvalidScaleValue => "INVALID_SCALE_VALUE",
            ErrorCode::InvalidDiagonal => "INVALID_DIAGONAL",
            ErrorCode::ReciprocityViolation => "RECIPROCITY_VIOLATION",
            ErrorCode::ConflictingJudgment => "CONFLICTING_JUDGMENT",
            ErrorCode::MissingJudgment => "MISSING_JUDGMENT",
            ErrorCode::IncompleteMatrix => "INCOMPLETE_MATRIX",
            ErrorCode::MissingCriterionMatrix => "MISSING_CRITERION_MATRIX",
            ErrorCode::InconsistentAlternativeSet => "INCONSISTENT_ALTERNATIVE_SET",
            ErrorCode::SingularOrDegenerateMatrix => "SINGULAR_OR_DEGENERATE_MATRIX",
            ErrorCode::RunNotFound => "RUN_NOT_FOUND",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let (code, field) = match &err {
            ValidationError::EmptyField { field } => (ErrorCode::EmptyField, field.clone()),
            ValidationError::InvalidFormat { field, .. } => {
                (ErrorCode::InvalidFormat, field.clone())
            }
        };
        DomainError::new(code, err.to_string()).with_detail("field", field)
    }
}
