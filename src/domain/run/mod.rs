//! Decision run - one setup and its judgments, the unit the service stores.

mod aggregate;
mod errors;
mod record;
mod report;

pub use aggregate::DecisionRun;
pub use errors::RunError;
pub use record::{JudgmentConflict, RunRecord, StoredJudgment};
pub use report::{CriterionConsistency, RankingReport};
