//! AHP domain errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Failures raised by the pairwise-comparison core.
///
/// Every variant is a local validation failure. None is transient, so the
/// caller should surface it as a rejected submission rather than retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AhpError {
    #[error("Invalid setup: {0}")]
    InvalidSetup(String),

    #[error("Unknown element '{element}' in {context}")]
    UnknownElement { element: String, context: String },

    #[error("Unknown comparison matrix '{0}'")]
    UnknownMatrix(String),

    #[error("Alternatives matrix for criterion '{0}' submitted more than once")]
    DuplicateMatrix(String),

    #[error("Value {value} for '{row}' vs '{col}' is not on the 1/9..9 scale")]
    InvalidScaleValue { row: String, col: String, value: String },

    #[error("Diagonal entry for '{element}' must be 1, got {value}")]
    InvalidDiagonal { element: String, value: f64 },

    #[error("'{row}' vs '{col}' = {forward} but '{col}' vs '{row}' = {backward}; entries must be reciprocal")]
    ReciprocityViolation {
        row: String,
        col: String,
        forward: f64,
        backward: f64,
    },

    #[error("'{row}' vs '{col}' already judged as {existing}; refusing {attempted}")]
    ConflictingJudgment {
        row: String,
        col: String,
        existing: String,
        attempted: String,
    },

    #[error("No judgment recorded for '{row}' vs '{col}'")]
    MissingJudgment { row: String, col: String },

    #[error("Matrix '{matrix}' is missing {} judgment(s)", .missing.len())]
    IncompleteMatrix {
        matrix: String,
        missing: Vec<(String, String)>,
    },

    #[error("Alternative weights for '{criterion}' do not match the alternative set")]
    InconsistentAlternativeSet { criterion: String },

    #[error("No alternative comparison matrix for criterion '{0}'")]
    MissingCriterionMatrix(String),

    #[error("Degenerate comparison matrix: {0}")]
    SingularOrDegenerateMatrix(String),
}

impl AhpError {
    pub fn invalid_setup(reason: impl Into<String>) -> Self {
        AhpError::InvalidSetup(reason.into())
    }

    pub fn unknown_element(element: impl Into<String>, context: impl Into<String>) -> Self {
        AhpError::UnknownElement {
            element: element.into(),
            context: context.into(),
        }
    }

    pub fn degenerate(reason: impl Into<String>) -> Self {
        AhpError::SingularOrDegenerateMatrix(reason.into())
    }

    /// Maps the failure to a transport-neutral error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            AhpError::InvalidSetup(_) => ErrorCode::InvalidSetup,
            AhpError::UnknownElement { .. } => ErrorCode::UnknownElement,
            AhpError::UnknownMatrix(_) => ErrorCode::UnknownMatrix,
            AhpError::DuplicateMatrix(_) => ErrorCode::DuplicateMatrix,
            AhpError::InvalidScaleValue { .. } => ErrorCode::InvalidScaleValue,
            AhpError::InvalidDiagonal { .. } => ErrorCode::InvalidDiagonal,
            AhpError::ReciprocityViolation { .. } => ErrorCode::ReciprocityViolation,
            AhpError::ConflictingJudgment { .. } => ErrorCode::ConflictingJudgment,
            AhpError::MissingJudgment { .. } => ErrorCode::MissingJudgment,
            AhpError::IncompleteMatrix { .. } => ErrorCode::IncompleteMatrix,
            AhpError::InconsistentAlternativeSet { .. } => ErrorCode::InconsistentAlternativeSet,
            AhpError::MissingCriterionMatrix(_) => ErrorCode::MissingCriterionMatrix,
            AhpError::SingularOrDegenerateMatrix(_) => ErrorCode::SingularOrDegenerateMatrix,
        }
    }

    /// True for failures caused by judgments not yet supplied, as opposed
    /// to malformed input.
    pub fn is_incomplete(&self) -> bool {
        matches!(
            self,
            AhpError::MissingJudgment { .. }
                | AhpError::IncompleteMatrix { .. }
                | AhpError::MissingCriterionMatrix(_)
        )
    }
}

impl From<AhpError> for DomainError {
    fn from(err: AhpError) -> Self {
        let base = DomainError::new(err.code(), err.to_string());
        match err {
            AhpError::UnknownElement { element, context } => base
                .with_detail("element", element)
                .with_detail("context", context),
            AhpError::UnknownMatrix(matrix) => base.with_detail("matrix", matrix),
            AhpError::InvalidScaleValue { row, col, value } => base
                .with_detail("row", row)
                .with_detail("col", col)
                .with_detail("value", value),
            AhpError::InvalidDiagonal { element, .. } => base.with_detail("element", element),
            AhpError::ReciprocityViolation { row, col, .. }
            | AhpError::ConflictingJudgment { row, col, .. }
            | AhpError::MissingJudgment { row, col } => {
                base.with_detail("row", row).with_detail("col", col)
            }
            AhpError::IncompleteMatrix { matrix, missing } => {
                let pairs = missing
                    .iter()
                    .map(|(a, b)| format!("{} vs {}", a, b))
                    .collect::<Vec<_>>()
                    .join(", ");
                base.with_detail("matrix", matrix)
                    .with_detail("missing", pairs)
            }
            AhpError::InconsistentAlternativeSet { criterion }
            | AhpError::DuplicateMatrix(criterion)
            | AhpError::MissingCriterionMatrix(criterion) => {
                base.with_detail("criterion", criterion)
            }
            AhpError::InvalidSetup(_) | AhpError::SingularOrDegenerateMatrix(_) => base,
        }
    }
}
