//! Ranking output of a decision run.

use serde::Serialize;

use crate::domain::ahp::{ConsistencyReport, ElementName, PriorityVector, Ranking};

/// Local weights and consistency of the alternatives under one criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionConsistency {
    pub criterion: ElementName,
    pub weights: PriorityVector,
    pub report: ConsistencyReport,
}

/// Ranking together with the intermediate weights it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingReport {
    pub ranking: Ranking,
    pub criteria_weights: PriorityVector,
    pub criteria_consistency: ConsistencyReport,
    pub alternative_consistency: Vec<CriterionConsistency>,
}

impl RankingReport {
    /// True when every matrix is within the conventional 0.1 ratio.
    pub fn all_acceptable(&self) -> bool {
        self.criteria_consistency.acceptable
            && self.alternative_consistency.iter().all(|c| c.report.acceptable)
    }
}
