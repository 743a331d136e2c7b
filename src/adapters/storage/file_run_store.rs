//! File-based Run Store Adapter
//!
//! Stores each run as one YAML file named after its id.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::RunId;
use crate::domain::run::RunRecord;
use crate::ports::{RunStore, RunStoreError};

/// File-based storage for decision runs
#[derive(Debug, Clone)]
pub struct FileRunStore {
    base_path: PathBuf,
}

impl FileRunStore {
    /// Create a store rooted at `base_path`. The directory is created on
    /// first write.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileRunStore::new("./data/runs");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn run_file_path(&self, id: RunId) -> PathBuf {
        self.base_path.join(format!("{}.yaml", id))
    }

    async fn ensure_dir(&self) -> Result<(), RunStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| RunStoreError::IoError(e.to_string()))
    }
}

#[async_trait]
impl RunStore for FileRunStore {
    async fn save(&self, record: &RunRecord) -> Result<(), RunStoreError> {
        self.ensure_dir().await?;

        let yaml = serde_yaml::to_string(record)
            .map_err(|e| RunStoreError::SerializationFailed(e.to_string()))?;

        // Readers never observe a partially written record.
        let file_path = self.run_file_path(record.id);
        let tmp_path = file_path.with_extension("yaml.tmp");
        fs::write(&tmp_path, yaml)
            .await
            .map_err(|e| RunStoreError::IoError(e.to_string()))?;
        fs::rename(&tmp_path, &file_path)
            .await
            .map_err(|e| RunStoreError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn load(&self, id: RunId) -> Result<RunRecord, RunStoreError> {
        let file_path = self.run_file_path(id);

        if !file_path.exists() {
            return Err(RunStoreError::NotFound(id));
        }

        let yaml = fs::read_to_string(&file_path)
            .await
            .map_err(|e| RunStoreError::IoError(e.to_string()))?;

        serde_yaml::from_str(&yaml).map_err(|e| RunStoreError::DeserializationFailed(e.to_string()))
    }

    async fn exists(&self, id: RunId) -> Result<bool, RunStoreError> {
        Ok(self.run_file_path(id).exists())
    }

    async fn delete(&self, id: RunId) -> Result<(), RunStoreError> {
        let file_path = self.run_file_path(id);

        if file_path.exists() {
            fs::remove_file(&file_path)
                .await
                .map_err(|e| RunStoreError::IoError(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::{ConflictPolicy, MatrixId, ResultsPayload, Setup};
    use crate::domain::run::DecisionRun;
    use tempfile::TempDir;

    fn test_run() -> DecisionRun {
        let setup = Setup::new(["Cost", "Quality"], ["A", "B"]).unwrap();
        DecisionRun::new(RunId::new(), setup, ConflictPolicy::default())
    }

    fn completed_run() -> DecisionRun {
        let mut run = test_run();
        let results: ResultsPayload = serde_json::from_value(serde_json::json!({
            "criteriaMatrix": {"Cost": {"Quality": 2}},
            "alternativeMatrices": {
                "Cost": {"A": {"B": 3}},
                "Quality": {"A": {"B": "1/2"}}
            }
        }))
        .unwrap();
        run.apply_results(&results).unwrap();
        run
    }

    #[tokio::test]
    async fn test_file_store_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileRunStore::new(temp_dir.path());
        let record = completed_run().to_record();

        store.save(&record).await.unwrap();
        let loaded = store.load(record.id).await.unwrap();

        assert_eq!(loaded, record);
    }

    #[tokio::test]
    async fn test_file_store_loaded_run_ranks_the_same() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileRunStore::new(temp_dir.path());
        let run = completed_run();

        store.save(&run.to_record()).await.unwrap();
        let restored = DecisionRun::from_record(store.load(*run.id()).await.unwrap()).unwrap();

        assert_eq!(
            restored.compute_ranking().unwrap(),
            run.compute_ranking().unwrap()
        );
    }

    #[tokio::test]
    async fn test_file_store_load_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileRunStore::new(temp_dir.path());

        let result = store.load(RunId::new()).await;

        assert!(matches!(result, Err(RunStoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_file_store_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let store = FileRunStore::new(&nested);
        let record = test_run().to_record();

        store.save(&record).await.unwrap();

        assert!(nested.join(format!("{}.yaml", record.id)).exists());
    }

    #[tokio::test]
    async fn test_file_store_exists_and_delete() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileRunStore::new(temp_dir.path());
        let record = test_run().to_record();

        assert!(!store.exists(record.id).await.unwrap());
        store.save(&record).await.unwrap();
        assert!(store.exists(record.id).await.unwrap());

        store.delete(record.id).await.unwrap();
        assert!(!store.exists(record.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_file_store_overwrites_record() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileRunStore::new(temp_dir.path());
        let mut run = test_run();
        store.save(&run.to_record()).await.unwrap();

        run.record_judgment(&MatrixId::Criteria, "Cost", "Quality", &"1/3".into())
            .unwrap();
        store.save(&run.to_record()).await.unwrap();

        let loaded = store.load(*run.id()).await.unwrap();
        assert_eq!(loaded.judgments.len(), 1);
        assert_eq!(loaded.judgments[0].value.label(), "1/3");
    }

    #[tokio::test]
    async fn test_file_store_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileRunStore::new(temp_dir.path());
        let id = RunId::new();
        std::fs::write(temp_dir.path().join(format!("{}.yaml", id)), "id: [unclosed").unwrap();

        let result = store.load(id).await;

        assert!(matches!(result, Err(RunStoreError::DeserializationFailed(_))));
    }
}
