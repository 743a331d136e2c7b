//! GetRankingHandler - Query handler computing a run's ranking.

use std::sync::Arc;
use tracing::debug;

use super::{load_run, RunLocks};
use crate::domain::foundation::RunId;
use crate::domain::run::{RankingReport, RunError};
use crate::ports::RunStore;

/// Query for the current ranking of a run.
#[derive(Debug, Clone)]
pub struct GetRankingQuery {
    pub run_id: RunId,
}

/// Handler computing rankings. Nothing is cached; every call recomputes
/// from the stored judgments.
pub struct GetRankingHandler {
    store: Arc<dyn RunStore>,
    locks: RunLocks,
}

impl GetRankingHandler {
    pub fn new(store: Arc<dyn RunStore>, locks: RunLocks) -> Self {
        Self { store, locks }
    }

    pub async fn handle(&self, query: GetRankingQuery) -> Result<RankingReport, RunError> {
        let run = {
            let _guard = self.locks.acquire(query.run_id).await;
            load_run(self.store.as_ref(), query.run_id).await?
        };

        let report = run.compute_ranking()?;

        debug!(
            run_id = %query.run_id,
            winner = report.ranking.winner().map(|w| w.name.as_str()).unwrap_or_default(),
            criteria_cr = report.criteria_consistency.consistency_ratio,
            all_acceptable = report.all_acceptable(),
            "Ranking computed"
        );
        Ok(report)
    }
}
