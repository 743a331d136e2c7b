//! CreateRunHandler - Command handler for starting a decision run.

use std::sync::Arc;
use tracing::info;

use crate::domain::ahp::{ConflictPolicy, Setup, SetupPayload};
use crate::domain::foundation::RunId;
use crate::domain::run::{DecisionRun, RunError};
use crate::ports::RunStore;

/// Command to create a run from a setup submission.
#[derive(Debug, Clone)]
pub struct CreateRunCommand {
    pub setup: SetupPayload,
}

/// Handler for creating runs.
pub struct CreateRunHandler {
    store: Arc<dyn RunStore>,
    conflict_policy: ConflictPolicy,
}

impl CreateRunHandler {
    pub fn new(store: Arc<dyn RunStore>, conflict_policy: ConflictPolicy) -> Self {
        Self {
            store,
            conflict_policy,
        }
    }

    pub async fn handle(&self, cmd: CreateRunCommand) -> Result<DecisionRun, RunError> {
        let setup = Setup::from_payload(&cmd.setup)?;
        let run = DecisionRun::new(RunId::new(), setup, self.conflict_policy);

        self.store.save(&run.to_record()).await?;

        info!(
            run_id = %run.id(),
            criteria = run.setup().criteria().len(),
            alternatives = run.setup().alternatives().len(),
            "Decision run created"
        );
        Ok(run)
    }
}
