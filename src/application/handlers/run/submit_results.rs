//! SubmitResultsHandler - Command handler for whole-run judgment submissions.

use std::sync::Arc;
use tracing::info;

use super::{load_run, RunLocks};
use crate::domain::ahp::ResultsPayload;
use crate::domain::foundation::RunId;
use crate::domain::run::{DecisionRun, RunError};
use crate::ports::RunStore;

/// Command to replace every judgment of a run.
#[derive(Debug, Clone)]
pub struct SubmitResultsCommand {
    pub run_id: RunId,
    pub results: ResultsPayload,
}

/// Handler for results submissions. Either every matrix is accepted or the
/// stored run is left as it was.
pub struct SubmitResultsHandler {
    store: Arc<dyn RunStore>,
    locks: RunLocks,
}

impl SubmitResultsHandler {
    pub fn new(store: Arc<dyn RunStore>, locks: RunLocks) -> Self {
        Self { store, locks }
    }

    pub async fn handle(&self, cmd: SubmitResultsCommand) -> Result<DecisionRun, RunError> {
        let _guard = self.locks.acquire(cmd.run_id).await;
        let mut run = load_run(self.store.as_ref(), cmd.run_id).await?;

        run.apply_results(&cmd.results)?;
        self.store.save(&run.to_record()).await?;

        let complete = run.matrices().filter(|m| m.is_complete()).count();
        info!(
            run_id = %cmd.run_id,
            matrices = run.matrix_ids().len(),
            complete_matrices = complete,
            "Decision run results submitted"
        );
        Ok(run)
    }
}
