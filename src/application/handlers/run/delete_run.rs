//! DeleteRunHandler - Command handler for discarding a run.

use std::sync::Arc;
use tracing::info;

use super::RunLocks;
use crate::domain::foundation::RunId;
use crate::domain::run::RunError;
use crate::ports::RunStore;

/// Command to delete a run.
#[derive(Debug, Clone)]
pub struct DeleteRunCommand {
    pub run_id: RunId,
}

/// Handler for deleting runs.
pub struct DeleteRunHandler {
    store: Arc<dyn RunStore>,
    locks: RunLocks,
}

impl DeleteRunHandler {
    pub fn new(store: Arc<dyn RunStore>, locks: RunLocks) -> Self {
        Self { store, locks }
    }

    pub async fn handle(&self, cmd: DeleteRunCommand) -> Result<(), RunError> {
        let _guard = self.locks.acquire(cmd.run_id).await;
        if !self.store.exists(cmd.run_id).await? {
            return Err(RunError::not_found(cmd.run_id));
        }
        self.store.delete(cmd.run_id).await?;

        info!(run_id = %cmd.run_id, "Decision run deleted");
        Ok(())
    }
}
