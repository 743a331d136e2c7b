//! Request and response DTOs for the decision run endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::ahp::{
    ComparisonMatrix, ConflictPolicy, JudgmentOutcome, RawJudgment, ScaleCodec, ScaleEntry,
    SetupPayload, SCALE_TOLERANCE,
};
use crate::domain::foundation::DomainError;
use crate::domain::run::{DecisionRun, RankingReport};
use crate::application::RecordJudgmentResult;

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/runs` and `PUT /api/runs/:id/setup`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetupRequest {
    pub criteria: Vec<String>,
    pub alternatives: Vec<String>,
}

impl From<SetupRequest> for SetupPayload {
    fn from(req: SetupRequest) -> Self {
        SetupPayload {
            criteria: req.criteria,
            alternatives: req.alternatives,
        }
    }
}

/// Body of `POST /api/runs/:id/judgments`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordJudgmentRequest {
    /// `"criteria"` or `"alternatives_in_<criterion>"`.
    pub matrix: String,
    pub row: String,
    pub col: String,
    pub value: RawJudgment,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

/// Judgment progress of one matrix.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixProgressResponse {
    pub matrix: String,
    pub judged: usize,
    pub required: usize,
    pub complete: bool,
}

impl From<&ComparisonMatrix> for MatrixProgressResponse {
    fn from(matrix: &ComparisonMatrix) -> Self {
        Self {
            matrix: matrix.id().to_string(),
            judged: matrix.judged_count(),
            required: matrix.required_judgments(),
            complete: matrix.is_complete(),
        }
    }
}

/// Summary of a run after any command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResponse {
    pub run_id: String,
    pub criteria: Vec<String>,
    pub alternatives: Vec<String>,
    pub conflict_policy: ConflictPolicy,
    pub matrices: Vec<MatrixProgressResponse>,
    pub conflict_count: usize,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&DecisionRun> for RunResponse {
    fn from(run: &DecisionRun) -> Self {
        Self {
            run_id: run.id().to_string(),
            criteria: run.setup().criteria().to_strings(),
            alternatives: run.setup().alternatives().to_strings(),
            conflict_policy: run.conflict_policy(),
            matrices: run.matrices().map(MatrixProgressResponse::from).collect(),
            conflict_count: run.conflicts().len(),
            created_at: run.created_at().to_rfc3339(),
            updated_at: run.updated_at().to_rfc3339(),
        }
    }
}

/// Outcome of a single judgment write.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgmentResponse {
    pub outcome: JudgmentOutcome,
    pub judged: usize,
    pub required: usize,
    pub matrix_complete: bool,
}

impl From<RecordJudgmentResult> for JudgmentResponse {
    fn from(result: RecordJudgmentResult) -> Self {
        Self {
            matrix_complete: result.matrix_complete(),
            outcome: result.outcome,
            judged: result.judged,
            required: result.required,
        }
    }
}

/// Ranking with the weights and consistency it was derived from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    #[serde(flatten)]
    pub report: RankingReport,
    pub all_acceptable: bool,
}

impl From<RankingReport> for RankingResponse {
    fn from(report: RankingReport) -> Self {
        Self {
            all_acceptable: report.all_acceptable(),
            report,
        }
    }
}

/// Allowed judgment values.
#[derive(Debug, Clone, Serialize)]
pub struct ScaleResponse {
    pub values: Vec<ScaleEntry>,
    pub tolerance: f64,
}

impl ScaleResponse {
    pub fn current() -> Self {
        Self {
            values: ScaleCodec::allowed_values(),
            tolerance: SCALE_TOLERANCE,
        }
    }
}

/// Error body shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Carries the domain code and any details through unchanged.
    pub fn from_domain(err: DomainError) -> Self {
        let details = if err.details.is_empty() {
            None
        } else {
            serde_json::to_value(&err.details).ok()
        };
        Self {
            code: err.code.to_string(),
            message: err.message,
            details,
        }
    }
}
