//! Priority Engine - priority vectors and consistency from finalized matrices.

use serde::{Deserialize, Serialize};

use super::{AhpError, ElementName, FinalizedMatrix};

/// Conventional upper bound of an acceptable consistency ratio.
pub const CONSISTENCY_THRESHOLD: f64 = 0.1;

/// Saaty's random consistency index for n = 1..=15.
const RANDOM_INDEX: [f64; 15] = [
    0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.51, 1.48, 1.56, 1.57, 1.59,
];

/// Weight of one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Priority {
    pub name: ElementName,
    pub weight: f64,
}

/// Normalized weights aligned to a matrix's element order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityVector {
    entries: Vec<Priority>,
}

impl PriorityVector {
    /// Wraps weights as given; no normalization is applied.
    pub fn new(entries: Vec<Priority>) -> Self {
        Self { entries }
    }

    /// Pairs names with weights in order.
    pub fn from_parts(names: &[ElementName], weights: &[f64]) -> Self {
        Self {
            entries: names
                .iter()
                .zip(weights)
                .map(|(name, &weight)| Priority {
                    name: name.clone(),
                    weight,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Priority> {
        self.entries.iter()
    }

    pub fn names(&self) -> Vec<&ElementName> {
        self.entries.iter().map(|p| &p.name).collect()
    }

    pub fn weights(&self) -> Vec<f64> {
        self.entries.iter().map(|p| p.weight).collect()
    }

    pub fn weight_of(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|p| p.name.as_str() == name)
            .map(|p| p.weight)
    }

    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|p| p.weight).sum()
    }

    /// Rescales the weights to sum to 1. A zero-sum vector is left as is.
    pub fn normalized(&self) -> Self {
        let total = self.sum();
        if total <= 0.0 || !total.is_finite() {
            return self.clone();
        }
        Self {
            entries: self
                .entries
                .iter()
                .map(|p| Priority {
                    name: p.name.clone(),
                    weight: p.weight / total,
                })
                .collect(),
        }
    }
}

/// Saaty consistency measures for one matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyReport {
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub consistency_ratio: f64,
    /// `consistency_ratio <= 0.1`. Informational only.
    pub acceptable: bool,
}

/// Priority computation over finalized comparison matrices.
pub struct PriorityEngine;

impl PriorityEngine {
    /// Computes weights as the normalized geometric mean of each row.
    ///
    /// # Algorithm
    /// `g_i = (Π_j M_ij)^(1/n)` evaluated in log space, then
    /// `w_i = g_i / Σ_k g_k`. Deterministic, no iteration.
    ///
    /// # Errors
    /// `SingularOrDegenerateMatrix` if the matrix is empty, not square, or
    /// holds a non-positive or non-finite entry.
    pub fn compute_priorities(matrix: &FinalizedMatrix) -> Result<PriorityVector, AhpError> {
        Self::check_matrix(matrix)?;

        let n = matrix.dimension();
        if n == 1 {
            return Ok(PriorityVector::from_parts(matrix.elements(), &[1.0]));
        }

        let geometric_means: Vec<f64> = matrix
            .rows()
            .iter()
            .map(|row| (row.iter().map(|v| v.ln()).sum::<f64>() / n as f64).exp())
            .collect();
        let total: f64 = geometric_means.iter().sum();
        if total <= 0.0 || !total.is_finite() {
            return Err(AhpError::degenerate(format!(
                "row geometric means of '{}' sum to {}",
                matrix.id(),
                total
            )));
        }

        let weights: Vec<f64> = geometric_means.iter().map(|g| g / total).collect();
        Ok(PriorityVector::from_parts(matrix.elements(), &weights))
    }

    /// Consistency ratio `CR = CI / RI(n)` of `matrix` under `priorities`.
    pub fn consistency_ratio(
        matrix: &FinalizedMatrix,
        priorities: &PriorityVector,
    ) -> Result<f64, AhpError> {
        Ok(Self::consistency(matrix, priorities)?.consistency_ratio)
    }

    /// Full consistency report.
    ///
    /// `λmax` is the mean of `(Av)_i / v_i`; `CI = (λmax - n) / (n - 1)` for
    /// n > 2 and 0 otherwise. Rounding can push `CI` slightly below zero for
    /// perfectly consistent input, so it is clamped at 0.
    pub fn consistency(
        matrix: &FinalizedMatrix,
        priorities: &PriorityVector,
    ) -> Result<ConsistencyReport, AhpError> {
        Self::check_matrix(matrix)?;

        let n = matrix.dimension();
        let aligned = priorities.len() == n
            && priorities
                .names()
                .iter()
                .zip(matrix.elements())
                .all(|(a, b)| *a == b);
        if !aligned {
            return Err(AhpError::degenerate(format!(
                "priority vector does not match the elements of '{}'",
                matrix.id()
            )));
        }

        let weights = priorities.weights();
        if weights.iter().any(|w| !w.is_finite() || *w <= 0.0) {
            return Err(AhpError::degenerate("priority weights must be positive"));
        }

        let lambda_max = matrix
            .rows()
            .iter()
            .zip(&weights)
            .map(|(row, w)| {
                let weighted: f64 = row.iter().zip(&weights).map(|(m, v)| m * v).sum();
                weighted / w
            })
            .sum::<f64>()
            / n as f64;

        let consistency_index = if n > 2 {
            ((lambda_max - n as f64) / (n as f64 - 1.0)).max(0.0)
        } else {
            0.0
        };

        let random_index = Self::random_index(n);
        let consistency_ratio = if random_index > 0.0 {
            consistency_index / random_index
        } else {
            0.0
        };

        Ok(ConsistencyReport {
            lambda_max,
            consistency_index,
            consistency_ratio,
            acceptable: consistency_ratio <= CONSISTENCY_THRESHOLD,
        })
    }

    /// Random index for an `n×n` matrix; sizes past the table reuse its last entry.
    pub fn random_index(n: usize) -> f64 {
        match n {
            0 => 0.0,
            n if n <= RANDOM_INDEX.len() => RANDOM_INDEX[n - 1],
            _ => RANDOM_INDEX[RANDOM_INDEX.len() - 1],
        }
    }

    fn check_matrix(matrix: &FinalizedMatrix) -> Result<(), AhpError> {
        let n = matrix.dimension();
        if n == 0 {
            return Err(AhpError::degenerate(format!("'{}' has no elements", matrix.id())));
        }
        if matrix.rows().len() != n || matrix.rows().iter().any(|row| row.len() != n) {
            return Err(AhpError::degenerate(format!(
                "'{}' is not a {}x{} matrix",
                matrix.id(),
                n,
                n
            )));
        }
        for (i, row) in matrix.rows().iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                if !value.is_finite() || *value <= 0.0 {
                    return Err(AhpError::degenerate(format!(
                        "'{}' entry ({}, {}) is {}",
                        matrix.id(),
                        matrix.elements()[i],
                        matrix.elements()[j],
                        value
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::{ComparisonMatrix, MatrixId};

    fn names(list: &[&str]) -> Vec<ElementName> {
        list.iter().map(|n| ElementName::new(*n).unwrap()).collect()
    }

    /// Builds `M_ij = w_i / w_j`.
    fn consistent_matrix(weights: &[f64]) -> FinalizedMatrix {
        let labels: Vec<String> = (0..weights.len()).map(|i| format!("E{}", i)).collect();
        let rows = weights
            .iter()
            .map(|wi| weights.iter().map(|wj| wi / wj).collect())
            .collect();
        FinalizedMatrix::from_rows(
            MatrixId::Criteria,
            labels.iter().map(|l| ElementName::new(l.as_str()).unwrap()).collect(),
            rows,
        )
    }

    #[test]
    fn two_by_two_matches_hand_computation() {
        let mut m = ComparisonMatrix::create(MatrixId::Criteria, ["Cost", "Quality"]).unwrap();
        m.set_judgment("Cost", "Quality", 2.0).unwrap();
        let v = PriorityEngine::compute_priorities(&m.finalize().unwrap()).unwrap();

        assert!((v.weight_of("Cost").unwrap() - 2.0 / 3.0).abs() < 1e-9);
        assert!((v.weight_of("Quality").unwrap() - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn consistent_matrix_recovers_ground_truth() {
        let truth = [0.5, 0.3, 0.15, 0.05];
        let m = consistent_matrix(&truth);
        let v = PriorityEngine::compute_priorities(&m).unwrap();

        for (w, expected) in v.weights().iter().zip(truth) {
            assert!((w - expected).abs() < 1e-9);
        }
        assert!(PriorityEngine::consistency_ratio(&m, &v).unwrap().abs() < 1e-9);
    }

    #[test]
    fn consistent_scale_matrix_has_zero_ratio() {
        let mut m = ComparisonMatrix::create(MatrixId::Criteria, ["A", "B", "C"]).unwrap();
        m.set_judgment("A", "B", 2.0).unwrap();
        m.set_judgment("A", "C", 4.0).unwrap();
        m.set_judgment("B", "C", 2.0).unwrap();
        let dense = m.finalize().unwrap();
        let v = PriorityEngine::compute_priorities(&dense).unwrap();

        assert!((v.weight_of("A").unwrap() - 4.0 / 7.0).abs() < 1e-9);
        let report = PriorityEngine::consistency(&dense, &v).unwrap();
        assert!((report.lambda_max - 3.0).abs() < 1e-9);
        assert!(report.consistency_index.abs() < 1e-9);
        assert!(report.acceptable);
    }

    #[test]
    fn inconsistent_judgments_raise_the_ratio() {
        // A > B, B > C, yet C strongly > A.
        let mut m = ComparisonMatrix::create(MatrixId::Criteria, ["A", "B", "C"]).unwrap();
        m.set_judgment("A", "B", 5.0).unwrap();
        m.set_judgment("B", "C", 5.0).unwrap();
        m.set_judgment("C", "A", 5.0).unwrap();
        let dense = m.finalize().unwrap();
        let v = PriorityEngine::compute_priorities(&dense).unwrap();

        let report = PriorityEngine::consistency(&dense, &v).unwrap();
        assert!(report.consistency_ratio > CONSISTENCY_THRESHOLD);
        assert!(!report.acceptable);
    }

    #[test]
    fn two_by_two_is_always_consistent() {
        let mut m = ComparisonMatrix::create(MatrixId::Criteria, ["A", "B"]).unwrap();
        m.set_judgment("A", "B", 9.0).unwrap();
        let dense = m.finalize().unwrap();
        let v = PriorityEngine::compute_priorities(&dense).unwrap();
        assert_eq!(PriorityEngine::consistency_ratio(&dense, &v).unwrap(), 0.0);
    }

    #[test]
    fn single_element_gets_full_weight() {
        let m = FinalizedMatrix::from_rows(MatrixId::Criteria, names(&["Only"]), vec![vec![1.0]]);
        let v = PriorityEngine::compute_priorities(&m).unwrap();
        assert_eq!(v.weights(), vec![1.0]);
        assert_eq!(PriorityEngine::consistency_ratio(&m, &v).unwrap(), 0.0);
    }

    #[test]
    fn degenerate_entries_are_rejected() {
        for bad in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let m = FinalizedMatrix::from_rows(
                MatrixId::Criteria,
                names(&["A", "B"]),
                vec![vec![1.0, bad], vec![0.5, 1.0]],
            );
            assert!(matches!(
                PriorityEngine::compute_priorities(&m),
                Err(AhpError::SingularOrDegenerateMatrix(_))
            ));
        }
    }

    #[test]
    fn non_square_and_empty_matrices_are_rejected() {
        let ragged = FinalizedMatrix::from_rows(
            MatrixId::Criteria,
            names(&["A", "B"]),
            vec![vec![1.0, 2.0], vec![0.5]],
        );
        assert!(PriorityEngine::compute_priorities(&ragged).is_err());

        let empty = FinalizedMatrix::from_rows(MatrixId::Criteria, vec![], vec![]);
        assert!(PriorityEngine::compute_priorities(&empty).is_err());
    }

    #[test]
    fn misaligned_vector_is_rejected_by_consistency() {
        let m = consistent_matrix(&[0.6, 0.4]);
        let other = PriorityVector::from_parts(&names(&["X", "Y"]), &[0.6, 0.4]);
        assert!(PriorityEngine::consistency(&m, &other).is_err());
    }

    #[test]
    fn random_index_table() {
        assert_eq!(PriorityEngine::random_index(1), 0.0);
        assert_eq!(PriorityEngine::random_index(3), 0.58);
        assert_eq!(PriorityEngine::random_index(10), 1.49);
        assert_eq!(PriorityEngine::random_index(15), 1.59);
        assert_eq!(PriorityEngine::random_index(40), 1.59);
    }

    #[test]
    fn normalized_rescales_to_one() {
        let v = PriorityVector::from_parts(&names(&["A", "B"]), &[3.0, 1.0]).normalized();
        assert_eq!(v.weights(), vec![0.75, 0.25]);
    }

    #[test]
    fn vector_serializes_as_list() {
        let v = PriorityVector::from_parts(&names(&["A"]), &[1.0]);
        assert_eq!(
            serde_json::to_value(&v).unwrap(),
            serde_json::json!([{"name": "A", "weight": 1.0}])
        );
    }
}
