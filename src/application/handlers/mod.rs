//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod run;

pub use run::{
    CreateRunCommand, CreateRunHandler, DeleteRunCommand, DeleteRunHandler, GetRankingHandler,
    GetRankingQuery, RecordJudgmentCommand, RecordJudgmentHandler, RecordJudgmentResult,
    ReplaceSetupCommand, ReplaceSetupHandler, RunLocks, SubmitResultsCommand,
    SubmitResultsHandler,
};
