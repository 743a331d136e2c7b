//! In-Memory Run Store Adapter
//!
//! Keeps run records in memory. Used for development and tests, and as the
//! default backend.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::RunId;
use crate::domain::run::RunRecord;
use crate::ports::{RunStore, RunStoreError};

/// In-memory storage for decision runs
#[derive(Debug, Clone)]
pub struct InMemoryRunStore {
    runs: Arc<RwLock<HashMap<RunId, RunRecord>>>,
}

impl InMemoryRunStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            runs: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored runs (useful for tests)
    pub async fn clear(&self) {
        self.runs.write().await.clear();
    }

    /// Number of stored runs
    pub async fn run_count(&self) -> usize {
        self.runs.read().await.len()
    }
}

impl Default for InMemoryRunStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RunStore for InMemoryRunStore {
    async fn save(&self, record: &RunRecord) -> Result<(), RunStoreError> {
        let mut runs = self.runs.write().await;
        runs.insert(record.id, record.clone());
        Ok(())
    }

    async fn load(&self, id: RunId) -> Result<RunRecord, RunStoreError> {
        let runs = self.runs.read().await;
        runs.get(&id).cloned().ok_or(RunStoreError::NotFound(id))
    }

    async fn exists(&self, id: RunId) -> Result<bool, RunStoreError> {
        Ok(self.runs.read().await.contains_key(&id))
    }

    async fn delete(&self, id: RunId) -> Result<(), RunStoreError> {
        self.runs.write().await.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::{ConflictPolicy, MatrixId, Setup};
    use crate::domain::run::DecisionRun;

    fn test_record() -> RunRecord {
        let setup = Setup::new(["Cost", "Quality"], ["A", "B"]).unwrap();
        let mut run = DecisionRun::new(RunId::new(), setup, ConflictPolicy::default());
        run.record_judgment(&MatrixId::Criteria, "Cost", "Quality", &2.0.into())
            .unwrap();
        run.to_record()
    }

    #[tokio::test]
    async fn test_in_memory_save_and_load() {
        let store = InMemoryRunStore::new();
        let record = test_record();

        store.save(&record).await.unwrap();
        let loaded = store.load(record.id).await.unwrap();

        assert_eq!(loaded, record);
    }

    #[tokio::test]
    async fn test_in_memory_load_nonexistent() {
        let store = InMemoryRunStore::new();
        let result = store.load(RunId::new()).await;
        assert!(matches!(result, Err(RunStoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_in_memory_save_replaces() {
        let store = InMemoryRunStore::new();
        let mut record = test_record();
        store.save(&record).await.unwrap();

        record.judgments.clear();
        store.save(&record).await.unwrap();

        assert!(store.load(record.id).await.unwrap().judgments.is_empty());
        assert_eq!(store.run_count().await, 1);
    }

    #[tokio::test]
    async fn test_in_memory_exists_and_delete() {
        let store = InMemoryRunStore::new();
        let record = test_record();

        assert!(!store.exists(record.id).await.unwrap());
        store.save(&record).await.unwrap();
        assert!(store.exists(record.id).await.unwrap());

        store.delete(record.id).await.unwrap();
        assert!(!store.exists(record.id).await.unwrap());
        store.delete(record.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_in_memory_clear() {
        let store = InMemoryRunStore::new();
        store.save(&test_record()).await.unwrap();
        store.save(&test_record()).await.unwrap();
        assert_eq!(store.run_count().await, 2);

        store.clear().await;
        assert_eq!(store.run_count().await, 0);
    }
}
