//! Decision run command and query handlers.
//!
//! Every handler that touches an existing run holds that run's lock from
//! load to save, so concurrent requests on one run apply in sequence.

mod create_run;
mod delete_run;
mod get_ranking;
mod locks;
mod record_judgment;
mod replace_setup;
mod submit_results;

pub use create_run::{CreateRunCommand, CreateRunHandler};
pub use delete_run::{DeleteRunCommand, DeleteRunHandler};
pub use get_ranking::{GetRankingHandler, GetRankingQuery};
pub use locks::RunLocks;
pub use record_judgment::{RecordJudgmentCommand, RecordJudgmentHandler, RecordJudgmentResult};
pub use replace_setup::{ReplaceSetupCommand, ReplaceSetupHandler};
pub use submit_results::{SubmitResultsCommand, SubmitResultsHandler};

use crate::domain::foundation::RunId;
use crate::domain::run::{DecisionRun, RunError};
use crate::ports::RunStore;

/// Loads and rebuilds a run. A stored record that no longer validates is
/// reported as an infrastructure failure, not as a client error.
async fn load_run(store: &dyn RunStore, id: RunId) -> Result<DecisionRun, RunError> {
    let record = store.load(id).await?;
    DecisionRun::from_record(record)
        .map_err(|e| RunError::infrastructure(format!("stored run {} is invalid: {}", id, e)))
}
