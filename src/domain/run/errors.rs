//! Run-level error types.

use crate::domain::ahp::AhpError;
use crate::domain::foundation::{DomainError, ErrorCode, RunId};
use crate::ports::RunStoreError;

/// Errors surfaced by run command and query handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum RunError {
    /// No run with this id exists.
    NotFound(RunId),
    /// The request was rejected by the comparison core.
    Domain(AhpError),
    /// Storage or another collaborator failed.
    Infrastructure(String),
}

impl RunError {
    pub fn not_found(id: RunId) -> Self {
        RunError::NotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        RunError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            RunError::NotFound(_) => ErrorCode::RunNotFound,
            RunError::Domain(err) => err.code(),
            RunError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            RunError::NotFound(id) => format!("Decision run not found: {}", id),
            RunError::Domain(err) => err.to_string(),
            RunError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RunError {}

impl From<AhpError> for RunError {
    fn from(err: AhpError) -> Self {
        RunError::Domain(err)
    }
}

impl From<RunStoreError> for RunError {
    fn from(err: RunStoreError) -> Self {
        match err {
            RunStoreError::NotFound(id) => RunError::NotFound(id),
            other => RunError::Infrastructure(other.to_string()),
        }
    }
}

impl From<RunError> for DomainError {
    fn from(err: RunError) -> Self {
        match err {
            RunError::Domain(inner) => inner.into(),
            other => DomainError::new(other.code(), other.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_not_found_becomes_not_found() {
        let id = RunId::new();
        let err: RunError = RunStoreError::NotFound(id).into();
        assert_eq!(err, RunError::NotFound(id));
        assert_eq!(err.code(), ErrorCode::RunNotFound);
    }

    #[test]
    fn other_store_failures_are_infrastructure() {
        let err: RunError = RunStoreError::IoError("disk full".to_string()).into();
        assert_eq!(err.code(), ErrorCode::StorageError);
        assert!(err.message().contains("disk full"));
    }

    #[test]
    fn domain_errors_keep_their_code() {
        let err: RunError = AhpError::UnknownMatrix("alternatives_in_Speed".to_string()).into();
        assert_eq!(err.code(), ErrorCode::UnknownMatrix);
        assert!(err.to_string().contains("alternatives_in_Speed"));
    }
}
