//! Hierarchy Aggregator - combines criteria weights with per-criterion
//! alternative priorities into a final ranking.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{AhpError, ElementName, PriorityVector};

/// One alternative with its overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub name: ElementName,
    pub score: f64,
}

/// Alternatives ordered by descending score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ranking {
    entries: Vec<RankedAlternative>,
}

impl Ranking {
    pub fn entries(&self) -> &[RankedAlternative] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest-scoring alternative.
    pub fn winner(&self) -> Option<&RankedAlternative> {
        self.entries.first()
    }

    pub fn score_of(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.name.as_str() == name)
            .map(|e| e.score)
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }
}

/// Weighted-sum synthesis of a two-level hierarchy.
pub struct HierarchyAggregator;

impl HierarchyAggregator {
    /// Scores each alternative as `Σ_c w_c · p_c(a)`.
    ///
    /// Every vector in `alternative_priorities` must list the same
    /// alternatives in the same order; that order is the tie-break for equal
    /// scores.
    ///
    /// # Errors
    /// - `UnknownElement` for a vector keyed by a criterion not in `criteria_weights`
    /// - `InconsistentAlternativeSet` for a repeated criterion or mismatched alternatives
    /// - `MissingCriterionMatrix` when a weighted criterion has no vector
    pub fn aggregate(
        criteria_weights: &PriorityVector,
        alternative_priorities: &[(ElementName, PriorityVector)],
    ) -> Result<Ranking, AhpError> {
        let mut seen: HashSet<&ElementName> = HashSet::new();
        for (criterion, _) in alternative_priorities {
            if criteria_weights.weight_of(criterion.as_str()).is_none() {
                return Err(AhpError::unknown_element(
                    criterion.as_str(),
                    "criteria weights",
                ));
            }
            if !seen.insert(criterion) {
                return Err(AhpError::InconsistentAlternativeSet {
                    criterion: criterion.to_string(),
                });
            }
        }

        let reference = alternative_priorities
            .first()
            .map(|(_, v)| v.names())
            .unwrap_or_default();
        for (criterion, vector) in alternative_priorities {
            if vector.names() != reference {
                return Err(AhpError::InconsistentAlternativeSet {
                    criterion: criterion.to_string(),
                });
            }
        }

        let mut scores = vec![0.0_f64; reference.len()];
        for weight in criteria_weights.iter() {
            let vector = alternative_priorities
                .iter()
                .find(|(criterion, _)| *criterion == weight.name)
                .map(|(_, v)| v)
                .ok_or_else(|| AhpError::MissingCriterionMatrix(weight.name.to_string()))?;
            for (score, priority) in scores.iter_mut().zip(vector.iter()) {
                *score += weight.weight * priority.weight;
            }
        }

        let mut entries: Vec<RankedAlternative> = reference
            .into_iter()
            .zip(scores)
            .map(|(name, score)| RankedAlternative {
                name: name.clone(),
                score,
            })
            .collect();
        // Stable sort keeps input order for exact ties.
        entries.sort_by(|a, b| b.score.total_cmp(&a.score));

        Ok(Ranking { entries })
    }
}
