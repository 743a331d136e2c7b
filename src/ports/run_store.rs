//! Run Store Port - Interface for persisting decision runs.
//!
//! Stores hold [`RunRecord`]s, the raw setup plus canonical judgments.
//! Rebuilding and revalidating the aggregate is the caller's job.

use async_trait::async_trait;

use crate::domain::foundation::RunId;
use crate::domain::run::RunRecord;

/// Errors that can occur during run storage operations
#[derive(Debug, thiserror::Error)]
pub enum RunStoreError {
    #[error("Run not found: {0}")]
    NotFound(RunId),

    #[error("Failed to serialize run: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize run: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting and loading decision runs
#[async_trait]
pub trait RunStore: Send + Sync {
    /// Insert or replace the record for `record.id`.
    ///
    /// # Errors
    /// Returns `RunStoreError` if the write fails
    async fn save(&self, record: &RunRecord) -> Result<(), RunStoreError>;

    /// Load the record of a run.
    ///
    /// # Errors
    /// Returns `RunStoreError::NotFound` if no record exists
    async fn load(&self, id: RunId) -> Result<RunRecord, RunStoreError>;

    /// Check whether a run has been stored
    async fn exists(&self, id: RunId) -> Result<bool, RunStoreError>;

    /// Remove a run. Deleting an unknown run is not an error.
    async fn delete(&self, id: RunId) -> Result<(), RunStoreError>;
}
