//! HTTP adapter for decision run endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, JudgmentResponse, MatrixProgressResponse, RankingResponse,
    RecordJudgmentRequest, RunResponse, ScaleResponse, SetupRequest,
};
pub use handlers::{get_scale, RunHandlers};
pub use routes::run_routes;
