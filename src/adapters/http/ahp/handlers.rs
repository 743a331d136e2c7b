//! HTTP handlers for decision run endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::application::{
    CreateRunCommand, CreateRunHandler, DeleteRunCommand, DeleteRunHandler, GetRankingHandler,
    GetRankingQuery, RecordJudgmentCommand, RecordJudgmentHandler, ReplaceSetupCommand,
    ReplaceSetupHandler, RunLocks, SubmitResultsCommand, SubmitResultsHandler,
};
use crate::domain::ahp::{AhpError, ConflictPolicy, MatrixId, ResultsPayload};
use crate::domain::foundation::{DomainError, RunId};
use crate::domain::run::RunError;
use crate::ports::RunStore;

use super::dto::{
    ErrorResponse, JudgmentResponse, RankingResponse, RecordJudgmentRequest, RunResponse,
    ScaleResponse, SetupRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct RunHandlers {
    create_handler: Arc<CreateRunHandler>,
    replace_setup_handler: Arc<ReplaceSetupHandler>,
    submit_results_handler: Arc<SubmitResultsHandler>,
    record_judgment_handler: Arc<RecordJudgmentHandler>,
    ranking_handler: Arc<GetRankingHandler>,
    delete_handler: Arc<DeleteRunHandler>,
}

impl RunHandlers {
    /// Wires every handler to one store and one shared lock table.
    pub fn new(store: Arc<dyn RunStore>, conflict_policy: ConflictPolicy) -> Self {
        let locks = RunLocks::new();
        Self {
            create_handler: Arc::new(CreateRunHandler::new(store.clone(), conflict_policy)),
            replace_setup_handler: Arc::new(ReplaceSetupHandler::new(
                store.clone(),
                locks.clone(),
            )),
            submit_results_handler: Arc::new(SubmitResultsHandler::new(
                store.clone(),
                locks.clone(),
            )),
            record_judgment_handler: Arc::new(RecordJudgmentHandler::new(
                store.clone(),
                locks.clone(),
            )),
            ranking_handler: Arc::new(GetRankingHandler::new(store.clone(), locks.clone())),
            delete_handler: Arc::new(DeleteRunHandler::new(store, locks)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/runs - Create a run from a setup
pub async fn create_run(
    State(handlers): State<RunHandlers>,
    Json(req): Json<SetupRequest>,
) -> Response {
    let cmd = CreateRunCommand { setup: req.into() };

    match handlers.create_handler.handle(cmd).await {
        Ok(run) => (StatusCode::CREATED, Json(RunResponse::from(&run))).into_response(),
        Err(e) => handle_run_error(e),
    }
}

/// PUT /api/runs/:id/setup - Replace the setup, discarding all judgments
pub async fn replace_setup(
    State(handlers): State<RunHandlers>,
    Path(run_id): Path<String>,
    Json(req): Json<SetupRequest>,
) -> Response {
    let run_id = match parse_run_id(&run_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = ReplaceSetupCommand {
        run_id,
        setup: req.into(),
    };

    match handlers.replace_setup_handler.handle(cmd).await {
        Ok(run) => (StatusCode::OK, Json(RunResponse::from(&run))).into_response(),
        Err(e) => handle_run_error(e),
    }
}

/// POST /api/runs/:id/results - Replace every judgment at once
pub async fn submit_results(
    State(handlers): State<RunHandlers>,
    Path(run_id): Path<String>,
    Json(results): Json<ResultsPayload>,
) -> Response {
    let run_id = match parse_run_id(&run_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = SubmitResultsCommand { run_id, results };

    match handlers.submit_results_handler.handle(cmd).await {
        Ok(run) => (StatusCode::OK, Json(RunResponse::from(&run))).into_response(),
        Err(e) => handle_run_error(e),
    }
}

/// POST /api/runs/:id/judgments - Record one pairwise judgment
pub async fn record_judgment(
    State(handlers): State<RunHandlers>,
    Path(run_id): Path<String>,
    Json(req): Json<RecordJudgmentRequest>,
) -> Response {
    let run_id = match parse_run_id(&run_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let matrix = match req.matrix.parse::<MatrixId>() {
        Ok(matrix) => matrix,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::from_domain(e.into())),
            )
                .into_response()
        }
    };

    let cmd = RecordJudgmentCommand {
        run_id,
        matrix,
        row: req.row,
        col: req.col,
        value: req.value,
    };

    match handlers.record_judgment_handler.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(JudgmentResponse::from(result))).into_response(),
        Err(e) => handle_run_error(e),
    }
}

/// GET /api/runs/:id/ranking - Compute the current ranking
pub async fn get_ranking(
    State(handlers): State<RunHandlers>,
    Path(run_id): Path<String>,
) -> Response {
    let run_id = match parse_run_id(&run_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .ranking_handler
        .handle(GetRankingQuery { run_id })
        .await
    {
        Ok(report) => (StatusCode::OK, Json(RankingResponse::from(report))).into_response(),
        Err(e) => handle_run_error(e),
    }
}

/// DELETE /api/runs/:id - Discard a run
pub async fn delete_run(
    State(handlers): State<RunHandlers>,
    Path(run_id): Path<String>,
) -> Response {
    let run_id = match parse_run_id(&run_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .delete_handler
        .handle(DeleteRunCommand { run_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_run_error(e),
    }
}

/// GET /api/scale - Allowed judgment values
pub async fn get_scale() -> Response {
    (StatusCode::OK, Json(ScaleResponse::current())).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_run_id(raw: &str) -> Result<RunId, Response> {
    raw.parse::<RunId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid run ID")),
        )
            .into_response()
    })
}

fn domain_status(err: &AhpError) -> StatusCode {
    if err.is_incomplete() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else if matches!(err, AhpError::ConflictingJudgment { .. }) {
        StatusCode::CONFLICT
    } else {
        StatusCode::BAD_REQUEST
    }
}

fn handle_run_error(error: RunError) -> Response {
    match error {
        RunError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Decision run", &id.to_string())),
        )
            .into_response(),
        RunError::Domain(err) => {
            let status = domain_status(&err);
            let body = ErrorResponse::from_domain(DomainError::from(err));
            (status, Json(body)).into_response()
        }
        RunError::Infrastructure(msg) => {
            error!(error = %msg, "Decision run request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(msg)),
            )
                .into_response()
        }
    }
}
