//! ReplaceSetupHandler - Command handler for replacing a run's setup.

use std::sync::Arc;
use tracing::info;

use super::{load_run, RunLocks};
use crate::domain::ahp::{Setup, SetupPayload};
use crate::domain::foundation::RunId;
use crate::domain::run::{DecisionRun, RunError};
use crate::ports::RunStore;

/// Command to replace the criteria and alternatives of a run.
#[derive(Debug, Clone)]
pub struct ReplaceSetupCommand {
    pub run_id: RunId,
    pub setup: SetupPayload,
}

/// Handler for replacing setups. Every judgment of the run is discarded.
pub struct ReplaceSetupHandler {
    store: Arc<dyn RunStore>,
    locks: RunLocks,
}

impl ReplaceSetupHandler {
    pub fn new(store: Arc<dyn RunStore>, locks: RunLocks) -> Self {
        Self { store, locks }
    }

    pub async fn handle(&self, cmd: ReplaceSetupCommand) -> Result<DecisionRun, RunError> {
        let setup = Setup::from_payload(&cmd.setup)?;

        let _guard = self.locks.acquire(cmd.run_id).await;
        let mut run = load_run(self.store.as_ref(), cmd.run_id).await?;
        let discarded: usize = run.matrices().map(|m| m.judged_count()).sum();

        run.replace_setup(setup);
        self.store.save(&run.to_record()).await?;

        info!(
            run_id = %cmd.run_id,
            criteria = run.setup().criteria().len(),
            alternatives = run.setup().alternatives().len(),
            discarded_judgments = discarded,
            "Decision run setup replaced"
        );
        Ok(run)
    }
}
