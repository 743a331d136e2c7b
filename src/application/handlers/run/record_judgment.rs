//! RecordJudgmentHandler - Command handler for a single pairwise judgment.

use std::sync::Arc;
use tracing::{info, warn};

use super::{load_run, RunLocks};
use crate::domain::ahp::{JudgmentOutcome, MatrixId, RawJudgment};
use crate::domain::foundation::RunId;
use crate::domain::run::RunError;
use crate::ports::RunStore;

/// Command to record `row` compared to `col` in one matrix of a run.
#[derive(Debug, Clone)]
pub struct RecordJudgmentCommand {
    pub run_id: RunId,
    pub matrix: MatrixId,
    pub row: String,
    pub col: String,
    pub value: RawJudgment,
}

/// Result of a recorded judgment.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordJudgmentResult {
    pub outcome: JudgmentOutcome,
    /// Judged pairs in the matrix after the write.
    pub judged: usize,
    /// Pairs the matrix needs before it can be finalized.
    pub required: usize,
}

impl RecordJudgmentResult {
    pub fn matrix_complete(&self) -> bool {
        self.judged == self.required
    }
}

/// Handler for single judgments.
pub struct RecordJudgmentHandler {
    store: Arc<dyn RunStore>,
    locks: RunLocks,
}

impl RecordJudgmentHandler {
    pub fn new(store: Arc<dyn RunStore>, locks: RunLocks) -> Self {
        Self { store, locks }
    }

    pub async fn handle(
        &self,
        cmd: RecordJudgmentCommand,
    ) -> Result<RecordJudgmentResult, RunError> {
        let _guard = self.locks.acquire(cmd.run_id).await;
        let mut run = load_run(self.store.as_ref(), cmd.run_id).await?;

        let outcome = run.record_judgment(&cmd.matrix, &cmd.row, &cmd.col, &cmd.value)?;

        match outcome {
            JudgmentOutcome::Unchanged => {}
            JudgmentOutcome::Recorded => {
                self.store.save(&run.to_record()).await?;
                info!(
                    run_id = %cmd.run_id,
                    matrix = %cmd.matrix,
                    row = %cmd.row,
                    col = %cmd.col,
                    value = %cmd.value,
                    "Judgment recorded"
                );
            }
            JudgmentOutcome::Overwritten { previous } => {
                self.store.save(&run.to_record()).await?;
                warn!(
                    run_id = %cmd.run_id,
                    matrix = %cmd.matrix,
                    row = %cmd.row,
                    col = %cmd.col,
                    previous = %previous,
                    value = %cmd.value,
                    "Conflicting judgment overwrote an earlier value"
                );
            }
        }

        let matrix = run.matrix(&cmd.matrix)?;
        Ok(RecordJudgmentResult {
            outcome,
            judged: matrix.judged_count(),
            required: matrix.required_judgments(),
        })
    }
}
