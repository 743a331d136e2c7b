//! HTTP routes for decision run endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    create_run, delete_run, get_ranking, record_judgment, replace_setup, submit_results,
    RunHandlers,
};

/// Creates the run router, to be nested under `/api/runs`.
pub fn run_routes(handlers: RunHandlers) -> Router {
    Router::new()
        .route("/", post(create_run))
        .route("/:id", delete(delete_run))
        .route("/:id/setup", put(replace_setup))
        .route("/:id/results", post(submit_results))
        .route("/:id/judgments", post(record_judgment))
        .route("/:id/ranking", get(get_ranking))
        .with_state(handlers)
}
