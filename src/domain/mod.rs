//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `ahp` - Pairwise comparison matrices, priorities and aggregation
//! - `run` - Decision run aggregate and its persistence record

pub mod ahp;
pub mod foundation;
pub mod run;
