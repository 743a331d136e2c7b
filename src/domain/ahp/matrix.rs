//! Pairwise comparison matrix with structural reciprocity.
//!
//! Only the upper triangle (row index < column index) is ever stored.
//! The diagonal is implicitly 1 and the lower triangle is derived at read
//! time, so a stored matrix cannot drift out of reciprocity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::{
    AhpError, ElementName, ElementSet, MatrixPayload, RawJudgment, ScaleValue, SCALE_TOLERANCE,
};
use crate::domain::foundation::ValidationError;

const CRITERIA_ID: &str = "criteria";
const ALTERNATIVES_PREFIX: &str = "alternatives_in_";

/// Identifies a matrix within a decision run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MatrixId {
    /// Criteria compared against each other.
    Criteria,
    /// Alternatives compared within one criterion.
    AlternativesIn(ElementName),
}

impl MatrixId {
    pub fn alternatives_in(criterion: ElementName) -> Self {
        MatrixId::AlternativesIn(criterion)
    }

    /// The criterion this matrix belongs to, for alternative matrices.
    pub fn criterion(&self) -> Option<&ElementName> {
        match self {
            MatrixId::Criteria => None,
            MatrixId::AlternativesIn(criterion) => Some(criterion),
        }
    }
}

impl fmt::Display for MatrixId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixId::Criteria => write!(f, "{}", CRITERIA_ID),
            MatrixId::AlternativesIn(criterion) => write!(f, "{}{}", ALTERNATIVES_PREFIX, criterion),
        }
    }
}

impl FromStr for MatrixId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == CRITERIA_ID {
            return Ok(MatrixId::Criteria);
        }
        match s.strip_prefix(ALTERNATIVES_PREFIX) {
            Some(criterion) => Ok(MatrixId::AlternativesIn(ElementName::new(criterion)?)),
            None => Err(ValidationError::invalid_format(
                "matrix",
                format!(
                    "expected '{}' or '{}<criterion>'",
                    CRITERIA_ID, ALTERNATIVES_PREFIX
                ),
            )),
        }
    }
}

impl TryFrom<String> for MatrixId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MatrixId> for String {
    fn from(id: MatrixId) -> Self {
        id.to_string()
    }
}

/// What happens when an already-judged pair receives a different value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// The newer value replaces the old one and the write is reported as
    /// [`JudgmentOutcome::Overwritten`].
    #[default]
    LastWriteWins,
    /// The write fails with [`AhpError::ConflictingJudgment`].
    Reject,
}

/// Result of a successful judgment write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JudgmentOutcome {
    /// First judgment for this pair.
    Recorded,
    /// Same value as already stored.
    Unchanged,
    /// A different value was stored before; `previous` is oriented the same
    /// way as the write (row vs col).
    Overwritten { previous: ScaleValue },
}

impl JudgmentOutcome {
    /// True when the write replaced a differing earlier judgment.
    pub fn is_conflict(&self) -> bool {
        matches!(self, JudgmentOutcome::Overwritten { .. })
    }
}

/// Sparse matrix of pairwise judgments over an ordered element set.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonMatrix {
    id: MatrixId,
    elements: ElementSet,
    /// Keyed by `(i, j)` with `i < j`.
    judgments: BTreeMap<(usize, usize), ScaleValue>,
    policy: ConflictPolicy,
}

impl ComparisonMatrix {
    /// Creates an empty matrix over an already validated element set.
    pub fn new(id: MatrixId, elements: ElementSet) -> Self {
        Self {
            id,
            elements,
            judgments: BTreeMap::new(),
            policy: ConflictPolicy::default(),
        }
    }

    /// Creates an empty matrix from raw names.
    ///
    /// # Errors
    /// `InvalidSetup` for fewer than two names, blanks or duplicates.
    pub fn create<I, S>(id: MatrixId, names: I) -> Result<Self, AhpError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let kind = match id {
            MatrixId::Criteria => "criteria",
            MatrixId::AlternativesIn(_) => "alternatives",
        };
        Ok(Self::new(id, ElementSet::new(kind, names)?))
    }

    /// Sets the conflict policy for subsequent writes.
    pub fn with_conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builds a matrix from a `{row: {col: value}}` payload.
    ///
    /// Diagonal entries, when present, must be 1. Both directions of a pair
    /// may be supplied but must then be reciprocal. The payload is validated
    /// as a whole; nothing is returned on any failure.
    pub fn from_payload(
        id: MatrixId,
        elements: ElementSet,
        payload: &MatrixPayload,
        policy: ConflictPolicy,
    ) -> Result<Self, AhpError> {
        let mut matrix = Self::new(id, elements).with_conflict_policy(policy);

        for (row, cols) in payload {
            let i = matrix.require_index(row)?;
            for (col, raw) in cols {
                let j = matrix.require_index(col)?;

                if i == j {
                    matrix.check_diagonal(i, raw)?;
                    continue;
                }

                let value = matrix.require_scale(row, col, raw)?;
                let (key, stored) = canonical(i, j, value);
                if let Some(existing) = matrix.judgments.get(&key) {
                    if *existing != stored {
                        let backward = if i < j {
                            existing.reciprocal()
                        } else {
                            *existing
                        };
                        return Err(AhpError::ReciprocityViolation {
                            row: row.trim().to_string(),
                            col: col.trim().to_string(),
                            forward: value.value(),
                            backward: backward.value(),
                        });
                    }
                }
                matrix.judgments.insert(key, stored);
            }
        }

        Ok(matrix)
    }

    pub fn id(&self) -> &MatrixId {
        &self.id
    }

    pub fn elements(&self) -> &ElementSet {
        &self.elements
    }

    pub fn conflict_policy(&self) -> ConflictPolicy {
        self.policy
    }

    /// Number of elements (rows and columns).
    pub fn dimension(&self) -> usize {
        self.elements.len()
    }

    /// Number of upper-triangle pairs a complete matrix holds.
    pub fn required_judgments(&self) -> usize {
        let n = self.dimension();
        n * (n - 1) / 2
    }

    /// Number of pairs judged so far.
    pub fn judged_count(&self) -> usize {
        self.judgments.len()
    }

    /// Records "`row` is `value` times as important as `col`".
    ///
    /// # Errors
    /// - `UnknownElement` if either name is absent or both are the same
    /// - `InvalidScaleValue` if `value` is not on the scale
    /// - `ConflictingJudgment` under [`ConflictPolicy::Reject`] when the pair
    ///   already holds a different value
    pub fn set_judgment(
        &mut self,
        row: &str,
        col: &str,
        value: f64,
    ) -> Result<JudgmentOutcome, AhpError> {
        self.set_raw(row, col, &RawJudgment::Number(value))
    }

    /// Like [`set_judgment`](Self::set_judgment) for a raw submitted value.
    pub fn set_raw(
        &mut self,
        row: &str,
        col: &str,
        raw: &RawJudgment,
    ) -> Result<JudgmentOutcome, AhpError> {
        let (i, j) = self.off_diagonal(row, col)?;
        let value = self.require_scale(row, col, raw)?;
        self.store(i, j, value)
    }

    /// Records a judgment that is already a scale value.
    pub fn set(
        &mut self,
        row: &str,
        col: &str,
        value: ScaleValue,
    ) -> Result<JudgmentOutcome, AhpError> {
        let (i, j) = self.off_diagonal(row, col)?;
        self.store(i, j, value)
    }

    /// Value of `row` compared to `col`.
    ///
    /// # Errors
    /// `UnknownElement` for foreign names, `MissingJudgment` if the pair has
    /// not been judged.
    pub fn get(&self, row: &str, col: &str) -> Result<f64, AhpError> {
        let i = self.require_index(row)?;
        let j = self.require_index(col)?;
        if i == j {
            return Ok(1.0);
        }
        self.lookup(i, j)
            .map(|v| v.value())
            .ok_or_else(|| AhpError::MissingJudgment {
                row: self.elements[i].to_string(),
                col: self.elements[j].to_string(),
            })
    }

    /// Scale value of `row` compared to `col`, if judged.
    pub fn judgment(&self, row: &str, col: &str) -> Option<ScaleValue> {
        let i = self.elements.index_of(row)?;
        let j = self.elements.index_of(col)?;
        if i == j {
            return Some(ScaleValue::EQUAL);
        }
        self.lookup(i, j)
    }

    /// True iff every upper-triangle pair has a judgment.
    pub fn is_complete(&self) -> bool {
        self.judgments.len() == self.required_judgments()
    }

    /// Upper-triangle pairs still lacking a judgment, in matrix order.
    pub fn missing_pairs(&self) -> Vec<(ElementName, ElementName)> {
        let n = self.dimension();
        let mut missing = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if !self.judgments.contains_key(&(i, j)) {
                    missing.push((self.elements[i].clone(), self.elements[j].clone()));
                }
            }
        }
        missing
    }

    /// Stored judgments as `(row, col, value)` with row before col.
    pub fn judgments(&self) -> impl Iterator<Item = (&ElementName, &ElementName, ScaleValue)> + '_ {
        self.judgments
            .iter()
            .map(|(&(i, j), &v)| (&self.elements[i], &self.elements[j], v))
    }

    /// Drops every judgment, keeping id, elements and policy.
    pub fn clear(&mut self) {
        self.judgments.clear();
    }

    /// Returns an immutable dense snapshot for priority computation.
    ///
    /// # Errors
    /// `IncompleteMatrix` listing the unjudged pairs.
    pub fn finalize(&self) -> Result<FinalizedMatrix, AhpError> {
        if !self.is_complete() {
            return Err(AhpError::IncompleteMatrix {
                matrix: self.id.to_string(),
                missing: self
                    .missing_pairs()
                    .into_iter()
                    .map(|(a, b)| (a.to_string(), b.to_string()))
                    .collect(),
            });
        }

        let n = self.dimension();
        let mut rows = vec![vec![1.0; n]; n];
        for (&(i, j), value) in &self.judgments {
            rows[i][j] = value.value();
            rows[j][i] = value.reciprocal().value();
        }

        Ok(FinalizedMatrix {
            id: self.id.clone(),
            elements: self.elements.as_slice().to_vec(),
            rows,
        })
    }

    fn lookup(&self, i: usize, j: usize) -> Option<ScaleValue> {
        if i < j {
            self.judgments.get(&(i, j)).copied()
        } else {
            self.judgments.get(&(j, i)).map(|v| v.reciprocal())
        }
    }

    fn store(&mut self, i: usize, j: usize, value: ScaleValue) -> Result<JudgmentOutcome, AhpError> {
        let (key, stored) = canonical(i, j, value);

        let previous = match self.judgments.get(&key) {
            None => None,
            Some(existing) if *existing == stored => return Ok(JudgmentOutcome::Unchanged),
            Some(existing) => Some(if i < j { *existing } else { existing.reciprocal() }),
        };

        match previous {
            None => {
                self.judgments.insert(key, stored);
                Ok(JudgmentOutcome::Recorded)
            }
            Some(previous) => match self.policy {
                ConflictPolicy::Reject => Err(AhpError::ConflictingJudgment {
                    row: self.elements[i].to_string(),
                    col: self.elements[j].to_string(),
                    existing: previous.label().to_string(),
                    attempted: value.label().to_string(),
                }),
                ConflictPolicy::LastWriteWins => {
                    self.judgments.insert(key, stored);
                    Ok(JudgmentOutcome::Overwritten { previous })
                }
            },
        }
    }

    fn off_diagonal(&self, row: &str, col: &str) -> Result<(usize, usize), AhpError> {
        let i = self.require_index(row)?;
        let j = self.require_index(col)?;
        if i == j {
            return Err(AhpError::unknown_element(
                row.trim(),
                format!("matrix '{}' (an element cannot be compared with itself)", self.id),
            ));
        }
        Ok((i, j))
    }

    fn require_index(&self, name: &str) -> Result<usize, AhpError> {
        self.elements
            .index_of(name)
            .ok_or_else(|| AhpError::unknown_element(name.trim(), format!("matrix '{}'", self.id)))
    }

    fn require_scale(&self, row: &str, col: &str, raw: &RawJudgment) -> Result<ScaleValue, AhpError> {
        raw.to_scale().ok_or_else(|| AhpError::InvalidScaleValue {
            row: row.trim().to_string(),
            col: col.trim().to_string(),
            value: raw.to_string(),
        })
    }

    fn check_diagonal(&self, i: usize, raw: &RawJudgment) -> Result<(), AhpError> {
        match raw.as_f64() {
            Some(v) if (v - 1.0).abs() <= SCALE_TOLERANCE => Ok(()),
            other => Err(AhpError::InvalidDiagonal {
                element: self.elements[i].to_string(),
                value: other.unwrap_or(f64::NAN),
            }),
        }
    }
}

/// Maps a directed judgment onto the stored `(min, max)` key.
fn canonical(i: usize, j: usize, value: ScaleValue) -> ((usize, usize), ScaleValue) {
    if i < j {
        ((i, j), value)
    } else {
        ((j, i), value.reciprocal())
    }
}

/// Immutable dense `n×n` view of a matrix.
///
/// Snapshots taken from a [`ComparisonMatrix`] are complete and
/// reciprocal. [`FinalizedMatrix::from_rows`] accepts arbitrary rows so
/// that externally built matrices can be scored; the priority engine
/// checks them before use.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalizedMatrix {
    id: MatrixId,
    elements: Vec<ElementName>,
    rows: Vec<Vec<f64>>,
}

impl FinalizedMatrix {
    pub fn from_rows(id: MatrixId, elements: Vec<ElementName>, rows: Vec<Vec<f64>>) -> Self {
        Self { id, elements, rows }
    }

    pub fn id(&self) -> &MatrixId {
        &self.id
    }

    pub fn elements(&self) -> &[ElementName] {
        &self.elements
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn dimension(&self) -> usize {
        self.elements.len()
    }

    pub fn entry(&self, i: usize, j: usize) -> Option<f64> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn abc() -> ComparisonMatrix {
        ComparisonMatrix::create(MatrixId::Criteria, ["A", "B", "C"]).unwrap()
    }

    fn payload(value: serde_json::Value) -> MatrixPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn matrix_id_roundtrips_through_text() {
        assert_eq!(MatrixId::Criteria.to_string(), "criteria");
        let id: MatrixId = "alternatives_in_Cost".parse().unwrap();
        assert_eq!(id.criterion().unwrap().as_str(), "Cost");
        assert_eq!(id.to_string(), "alternatives_in_Cost");
        assert!("alternatives_in_".parse::<MatrixId>().is_err());
        assert!("whatever".parse::<MatrixId>().is_err());
    }

    #[test]
    fn create_requires_two_elements() {
        let err = ComparisonMatrix::create(MatrixId::Criteria, ["Only"]).unwrap_err();
        assert!(matches!(err, AhpError::InvalidSetup(_)));
    }

    #[test]
    fn diagonal_is_implicitly_one() {
        let m = abc();
        assert_eq!(m.get("B", "B").unwrap(), 1.0);
        assert_eq!(m.judgment("C", "C"), Some(ScaleValue::EQUAL));
    }

    #[test]
    fn set_then_get_roundtrips_with_reciprocal() {
        for value in ScaleValue::ALL {
            let mut m = abc();
            m.set_judgment("A", "C", value.value()).unwrap();
            assert_eq!(m.get("A", "C").unwrap(), value.value());
            assert!((m.get("C", "A").unwrap() - 1.0 / value.value()).abs() < 1e-12);
        }
    }

    #[test]
    fn reverse_direction_is_stored_as_reciprocal() {
        let mut m = abc();
        m.set_judgment("C", "A", 5.0).unwrap();
        assert_eq!(m.get("C", "A").unwrap(), 5.0);
        assert_eq!(m.get("A", "C").unwrap(), 0.2);
        let (row, col, value) = m.judgments().next().unwrap();
        assert_eq!((row.as_str(), col.as_str(), value.label()), ("A", "C", "1/5"));
    }

    #[test]
    fn unknown_or_identical_elements_are_rejected() {
        let mut m = abc();
        assert!(matches!(
            m.set_judgment("A", "Z", 3.0),
            Err(AhpError::UnknownElement { .. })
        ));
        assert!(matches!(
            m.set_judgment("A", "A", 3.0),
            Err(AhpError::UnknownElement { .. })
        ));
        assert!(matches!(m.get("Z", "A"), Err(AhpError::UnknownElement { .. })));
        assert_eq!(m.judged_count(), 0);
    }

    #[test]
    fn off_scale_values_are_rejected_without_mutation() {
        let mut m = abc();
        let err = m.set_judgment("A", "B", 10.0).unwrap_err();
        assert!(matches!(err, AhpError::InvalidScaleValue { .. }));
        assert!(matches!(m.get("A", "B"), Err(AhpError::MissingJudgment { .. })));
    }

    #[test]
    fn rounded_decimals_are_snapped() {
        let mut m = abc();
        m.set_judgment("A", "B", 0.111).unwrap();
        assert_eq!(m.judgment("A", "B").unwrap().label(), "1/9");
        assert_eq!(m.get("B", "A").unwrap(), 9.0);
    }

    #[test]
    fn second_differing_write_wins_and_is_flagged() {
        let mut m = ComparisonMatrix::create(MatrixId::Criteria, ["A", "B"]).unwrap();
        assert_eq!(m.set_judgment("A", "B", 5.0).unwrap(), JudgmentOutcome::Recorded);

        let outcome = m.set_judgment("A", "B", 3.0).unwrap();
        assert!(outcome.is_conflict());
        assert_eq!(
            outcome,
            JudgmentOutcome::Overwritten {
                previous: ScaleValue::from_f64(5.0).unwrap()
            }
        );
        assert_eq!(m.get("A", "B").unwrap(), 3.0);
    }

    #[test]
    fn conflict_through_reverse_direction_reports_previous_in_write_orientation() {
        let mut m = ComparisonMatrix::create(MatrixId::Criteria, ["A", "B"]).unwrap();
        m.set_judgment("A", "B", 4.0).unwrap();
        let outcome = m.set_judgment("B", "A", 2.0).unwrap();
        assert_eq!(
            outcome,
            JudgmentOutcome::Overwritten {
                previous: ScaleValue::parse("1/4").unwrap()
            }
        );
        assert_eq!(m.get("A", "B").unwrap(), 0.5);
    }

    #[test]
    fn identical_resubmission_is_unchanged() {
        let mut m = ComparisonMatrix::create(MatrixId::Criteria, ["A", "B"]).unwrap();
        m.set_judgment("A", "B", 3.0).unwrap();
        assert_eq!(m.set_judgment("B", "A", 0.333).unwrap(), JudgmentOutcome::Unchanged);
    }

    #[test]
    fn reject_policy_refuses_conflicts() {
        let mut m = ComparisonMatrix::create(MatrixId::Criteria, ["A", "B"])
            .unwrap()
            .with_conflict_policy(ConflictPolicy::Reject);
        m.set_judgment("A", "B", 5.0).unwrap();

        let err = m.set_judgment("A", "B", 3.0).unwrap_err();
        assert_eq!(
            err,
            AhpError::ConflictingJudgment {
                row: "A".into(),
                col: "B".into(),
                existing: "5".into(),
                attempted: "3".into(),
            }
        );
        assert_eq!(m.get("A", "B").unwrap(), 5.0);
    }

    #[test]
    fn completeness_tracks_upper_triangle() {
        let mut m = abc();
        assert_eq!(m.required_judgments(), 3);
        m.set_judgment("A", "B", 2.0).unwrap();
        m.set_judgment("C", "B", 2.0).unwrap();
        assert!(!m.is_complete());
        let missing = m.missing_pairs();
        assert_eq!(missing.len(), 1);
        assert_eq!((missing[0].0.as_str(), missing[0].1.as_str()), ("A", "C"));

        m.set_judgment("A", "C", 4.0).unwrap();
        assert!(m.is_complete());
    }

    #[test]
    fn finalize_on_incomplete_matrix_fails() {
        let mut m = abc();
        m.set_judgment("A", "B", 2.0).unwrap();
        match m.finalize() {
            Err(AhpError::IncompleteMatrix { matrix, missing }) => {
                assert_eq!(matrix, "criteria");
                assert_eq!(missing.len(), 2);
            }
            other => panic!("expected IncompleteMatrix, got {:?}", other),
        }
    }

    #[test]
    fn finalize_produces_dense_reciprocal_view() {
        let mut m = abc();
        m.set_judgment("A", "B", 2.0).unwrap();
        m.set_judgment("A", "C", 4.0).unwrap();
        m.set_judgment("B", "C", 2.0).unwrap();

        let dense = m.finalize().unwrap();
        assert_eq!(dense.dimension(), 3);
        assert_eq!(dense.rows()[0], vec![1.0, 2.0, 4.0]);
        assert_eq!(dense.rows()[2], vec![0.25, 0.5, 1.0]);
        for i in 0..3 {
            for j in 0..3 {
                let product = dense.entry(i, j).unwrap() * dense.entry(j, i).unwrap();
                assert!((product - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn payload_with_upper_triangle_only() {
        let elements = ElementSet::new("alternatives", ["A", "B", "C"]).unwrap();
        let m = ComparisonMatrix::from_payload(
            MatrixId::Criteria,
            elements,
            &payload(json!({
                "A": {"A": 1, "B": "3", "C": 0.2},
                "B": {"B": 1, "C": "0.5"},
                "C": {"C": 1}
            })),
            ConflictPolicy::default(),
        )
        .unwrap();

        assert!(m.is_complete());
        assert_eq!(m.get("C", "A").unwrap(), 5.0);
        assert_eq!(m.get("B", "C").unwrap(), 0.5);
    }

    #[test]
    fn payload_with_full_reciprocal_map_is_accepted() {
        let elements = ElementSet::new("alternatives", ["A", "B"]).unwrap();
        let m = ComparisonMatrix::from_payload(
            MatrixId::Criteria,
            elements,
            &payload(json!({
                "A": {"A": 1, "B": 3},
                "B": {"A": 0.333, "B": 1}
            })),
            ConflictPolicy::default(),
        )
        .unwrap();
        assert_eq!(m.judged_count(), 1);
        assert_eq!(m.get("A", "B").unwrap(), 3.0);
    }

    #[test]
    fn payload_with_non_reciprocal_pair_is_rejected() {
        let elements = ElementSet::new("alternatives", ["A", "B"]).unwrap();
        let err = ComparisonMatrix::from_payload(
            MatrixId::Criteria,
            elements,
            &payload(json!({
                "A": {"B": 3},
                "B": {"A": 2}
            })),
            ConflictPolicy::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AhpError::ReciprocityViolation { .. }));
    }

    #[test]
    fn payload_with_bad_diagonal_is_rejected() {
        let elements = ElementSet::new("alternatives", ["A", "B"]).unwrap();
        let err = ComparisonMatrix::from_payload(
            MatrixId::Criteria,
            elements,
            &payload(json!({"A": {"A": 2, "B": 3}})),
            ConflictPolicy::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            AhpError::InvalidDiagonal {
                element: "A".into(),
                value: 2.0
            }
        );
    }

    #[test]
    fn payload_with_unknown_name_is_rejected() {
        let elements = ElementSet::new("alternatives", ["A", "B"]).unwrap();
        let err = ComparisonMatrix::from_payload(
            MatrixId::Criteria,
            elements,
            &payload(json!({"A": {"Z": 3}})),
            ConflictPolicy::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AhpError::UnknownElement { ref element, .. } if element == "Z"));
    }

    #[test]
    fn payload_with_off_scale_value_is_rejected() {
        let elements = ElementSet::new("alternatives", ["A", "B"]).unwrap();
        let err = ComparisonMatrix::from_payload(
            MatrixId::Criteria,
            elements,
            &payload(json!({"A": {"B": "11"}})),
            ConflictPolicy::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AhpError::InvalidScaleValue { .. }));
    }

    #[test]
    fn clear_drops_judgments() {
        let mut m = abc();
        m.set_judgment("A", "B", 2.0).unwrap();
        m.clear();
        assert_eq!(m.judged_count(), 0);
    }
}
