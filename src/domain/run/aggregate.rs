//! DecisionRun aggregate.
//!
//! A run owns one setup and every comparison matrix built over it: the
//! criteria matrix plus one alternatives matrix per criterion, in setup
//! order. All operations either succeed completely or leave the run as it
//! was.

use crate::domain::ahp::{
    AhpError, ComparisonMatrix, ConflictPolicy, HierarchyAggregator, JudgmentOutcome, MatrixId,
    MatrixPayload, PriorityEngine, RawJudgment, ResultsPayload, Setup,
};
use crate::domain::foundation::{RunId, Timestamp};

use super::{CriterionConsistency, JudgmentConflict, RankingReport, RunRecord, StoredJudgment};

/// Decision run aggregate.
///
/// # Invariants
///
/// - `alternative_matrices[k]` compares the alternatives under criterion `k`
/// - every matrix shares the run's conflict policy
/// - `conflicts` only grows; replacing the setup or results never erases it
#[derive(Debug, Clone)]
pub struct DecisionRun {
    id: RunId,
    setup: Setup,
    conflict_policy: ConflictPolicy,
    criteria_matrix: ComparisonMatrix,
    alternative_matrices: Vec<ComparisonMatrix>,
    conflicts: Vec<JudgmentConflict>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl DecisionRun {
    /// Starts a run with empty matrices.
    pub fn new(id: RunId, setup: Setup, conflict_policy: ConflictPolicy) -> Self {
        let now = Timestamp::now();
        let (criteria_matrix, alternative_matrices) = Self::empty_matrices(&setup, conflict_policy);
        Self {
            id,
            setup,
            conflict_policy,
            criteria_matrix,
            alternative_matrices,
            conflicts: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuilds a run from its stored record, replaying every judgment
    /// through validation.
    ///
    /// # Errors
    ///
    /// Any `AhpError` the setup or a stored judgment fails with.
    pub fn from_record(record: RunRecord) -> Result<Self, AhpError> {
        let setup = Setup::from_payload(&record.setup)?;
        let mut run = Self::new(record.id, setup, record.conflict_policy);

        for judgment in &record.judgments {
            run.matrix_mut(&judgment.matrix)?
                .set(&judgment.row, &judgment.col, judgment.value)?;
        }

        run.conflicts = record.conflicts;
        run.created_at = record.created_at;
        run.updated_at = record.updated_at;
        Ok(run)
    }

    /// Snapshot for storage.
    pub fn to_record(&self) -> RunRecord {
        let judgments = self
            .matrices()
            .flat_map(|matrix| {
                matrix.judgments().map(move |(row, col, value)| StoredJudgment {
                    matrix: matrix.id().clone(),
                    row: row.to_string(),
                    col: col.to_string(),
                    value,
                })
            })
            .collect();

        RunRecord {
            id: self.id,
            setup: self.setup.to_payload(),
            conflict_policy: self.conflict_policy,
            judgments,
            conflicts: self.conflicts.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &RunId {
        &self.id
    }

    pub fn setup(&self) -> &Setup {
        &self.setup
    }

    pub fn conflict_policy(&self) -> ConflictPolicy {
        self.conflict_policy
    }

    /// Overwrites recorded so far, oldest first.
    pub fn conflicts(&self) -> &[JudgmentConflict] {
        &self.conflicts
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Criteria matrix first, then one alternatives matrix per criterion.
    pub fn matrices(&self) -> impl Iterator<Item = &ComparisonMatrix> {
        std::iter::once(&self.criteria_matrix).chain(self.alternative_matrices.iter())
    }

    pub fn matrix_ids(&self) -> Vec<MatrixId> {
        self.matrices().map(|m| m.id().clone()).collect()
    }

    /// # Errors
    ///
    /// `UnknownMatrix` if `id` names a criterion outside the setup.
    pub fn matrix(&self, id: &MatrixId) -> Result<&ComparisonMatrix, AhpError> {
        match id {
            MatrixId::Criteria => Ok(&self.criteria_matrix),
            MatrixId::AlternativesIn(criterion) => self
                .setup
                .criteria()
                .index_of(criterion.as_str())
                .and_then(|k| self.alternative_matrices.get(k))
                .ok_or_else(|| AhpError::UnknownMatrix(id.to_string())),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces the setup and discards every judgment.
    pub fn replace_setup(&mut self, setup: Setup) {
        let (criteria_matrix, alternative_matrices) =
            Self::empty_matrices(&setup, self.conflict_policy);
        self.setup = setup;
        self.criteria_matrix = criteria_matrix;
        self.alternative_matrices = alternative_matrices;
        self.updated_at = Timestamp::now();
    }

    /// Records one judgment in the named matrix.
    ///
    /// An overwrite under `LastWriteWins` is appended to the conflict audit
    /// trail.
    ///
    /// # Errors
    ///
    /// - `UnknownMatrix` for a matrix outside the setup
    /// - any `ComparisonMatrix::set_raw` failure
    pub fn record_judgment(
        &mut self,
        matrix: &MatrixId,
        row: &str,
        col: &str,
        value: &RawJudgment,
    ) -> Result<JudgmentOutcome, AhpError> {
        let target = self.matrix_mut(matrix)?;
        let outcome = target.set_raw(row, col, value)?;

        if let JudgmentOutcome::Overwritten { previous } = outcome {
            let current = target.judgment(row, col).unwrap_or(previous);
            self.conflicts.push(JudgmentConflict {
                matrix: matrix.clone(),
                row: row.trim().to_string(),
                col: col.trim().to_string(),
                previous,
                current,
                at: Timestamp::now(),
            });
        }
        if outcome != JudgmentOutcome::Unchanged {
            self.updated_at = Timestamp::now();
        }
        Ok(outcome)
    }

    /// Replaces every judgment of the run with the submitted matrices.
    ///
    /// All matrices are built and validated before any is swapped in.
    /// Criteria absent from `alternativeMatrices` get an empty matrix.
    ///
    /// # Errors
    ///
    /// - `UnknownElement` for an alternatives matrix keyed by a foreign criterion
    /// - `DuplicateMatrix` when two keys name the same criterion once trimmed
    /// - any `ComparisonMatrix::from_payload` failure
    pub fn apply_results(&mut self, results: &ResultsPayload) -> Result<(), AhpError> {
        let criteria = self.setup.criteria();

        let mut by_criterion: Vec<Option<&MatrixPayload>> = vec![None; criteria.len()];
        for (key, payload) in &results.alternative_matrices {
            let index = criteria
                .index_of(key)
                .ok_or_else(|| AhpError::unknown_element(key.trim(), "alternativeMatrices"))?;
            if by_criterion[index].replace(payload).is_some() {
                return Err(AhpError::DuplicateMatrix(criteria[index].to_string()));
            }
        }

        let criteria_matrix = ComparisonMatrix::from_payload(
            MatrixId::Criteria,
            criteria.clone(),
            &results.criteria_matrix,
            self.conflict_policy,
        )?;

        let empty = MatrixPayload::new();
        let mut alternative_matrices = Vec::with_capacity(criteria.len());
        for (criterion, payload) in criteria.iter().zip(by_criterion) {
            alternative_matrices.push(ComparisonMatrix::from_payload(
                MatrixId::alternatives_in(criterion.clone()),
                self.setup.alternatives().clone(),
                payload.unwrap_or(&empty),
                self.conflict_policy,
            )?);
        }

        self.criteria_matrix = criteria_matrix;
        self.alternative_matrices = alternative_matrices;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Computation
    // ─────────────────────────────────────────────────────────────────────────

    /// Computes the ranking from the current judgments.
    ///
    /// # Errors
    ///
    /// - `MissingCriterionMatrix` when a criterion has no judgments at all
    /// - `IncompleteMatrix` when a matrix is partly judged
    /// - `SingularOrDegenerateMatrix` from the priority engine
    pub fn compute_ranking(&self) -> Result<RankingReport, AhpError> {
        let criteria = self.criteria_matrix.finalize()?;
        let criteria_weights = PriorityEngine::compute_priorities(&criteria)?;
        let criteria_consistency = PriorityEngine::consistency(&criteria, &criteria_weights)?;

        let mut by_criterion = Vec::with_capacity(self.alternative_matrices.len());
        let mut alternative_consistency = Vec::with_capacity(self.alternative_matrices.len());
        for (criterion, matrix) in self.setup.criteria().iter().zip(&self.alternative_matrices) {
            if matrix.judged_count() == 0 {
                return Err(AhpError::MissingCriterionMatrix(criterion.to_string()));
            }
            let dense = matrix.finalize()?;
            let weights = PriorityEngine::compute_priorities(&dense)?;
            let report = PriorityEngine::consistency(&dense, &weights)?;

            alternative_consistency.push(CriterionConsistency {
                criterion: criterion.clone(),
                weights: weights.clone(),
                report,
            });
            by_criterion.push((criterion.clone(), weights));
        }

        let ranking = HierarchyAggregator::aggregate(&criteria_weights, &by_criterion)?;

        Ok(RankingReport {
            ranking,
            criteria_weights,
            criteria_consistency,
            alternative_consistency,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn matrix_mut(&mut self, id: &MatrixId) -> Result<&mut ComparisonMatrix, AhpError> {
        match id {
            MatrixId::Criteria => Ok(&mut self.criteria_matrix),
            MatrixId::AlternativesIn(criterion) => {
                match self.setup.criteria().index_of(criterion.as_str()) {
                    Some(k) => self
                        .alternative_matrices
                        .get_mut(k)
                        .ok_or_else(|| AhpError::UnknownMatrix(id.to_string())),
                    None => Err(AhpError::UnknownMatrix(id.to_string())),
                }
            }
        }
    }

    fn empty_matrices(
        setup: &Setup,
        policy: ConflictPolicy,
    ) -> (ComparisonMatrix, Vec<ComparisonMatrix>) {
        let criteria = ComparisonMatrix::new(MatrixId::Criteria, setup.criteria().clone())
            .with_conflict_policy(policy);
        let alternatives = setup
            .criteria()
            .iter()
            .map(|criterion| {
                ComparisonMatrix::new(
                    MatrixId::alternatives_in(criterion.clone()),
                    setup.alternatives().clone(),
                )
                .with_conflict_policy(policy)
            })
            .collect();
        (criteria, alternatives)
    }
}
