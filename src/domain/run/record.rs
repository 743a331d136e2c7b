//! Persistence shape of a decision run.
//!
//! Stores keep the raw setup lists and the canonical judgments; everything
//! else is rebuilt, and revalidated, when the record is loaded.

use serde::{Deserialize, Serialize};

use crate::domain::ahp::{ConflictPolicy, MatrixId, ScaleValue, SetupPayload};
use crate::domain::foundation::{RunId, Timestamp};

/// One stored judgment, always in `row < col` setup order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredJudgment {
    pub matrix: MatrixId,
    pub row: String,
    pub col: String,
    pub value: ScaleValue,
}

/// Audit entry for a judgment that replaced a different earlier value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgmentConflict {
    pub matrix: MatrixId,
    pub row: String,
    pub col: String,
    pub previous: ScaleValue,
    pub current: ScaleValue,
    pub at: Timestamp,
}

/// Serializable snapshot of a [`super::DecisionRun`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub id: RunId,
    pub setup: SetupPayload,
    #[serde(default)]
    pub conflict_policy: ConflictPolicy,
    #[serde(default)]
    pub judgments: Vec<StoredJudgment>,
    #[serde(default)]
    pub conflicts: Vec<JudgmentConflict>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
