//! AHP Module - Pairwise comparison matrices and their aggregation.
//!
//! # Components
//!
//! - `ScaleCodec` / `ScaleValue` - The 17-point reciprocal scale (1/9 .. 9)
//! - `ComparisonMatrix` - Sparse reciprocal judgments over a named element set
//! - `PriorityEngine` - Geometric-mean priorities and Saaty consistency
//! - `HierarchyAggregator` - Weighted synthesis into a ranking of alternatives
//!
//! Everything here is synchronous and free of I/O. Runs, storage and
//! transport live in the layers above.

mod aggregator;
mod element;
mod errors;
mod matrix;
mod payload;
mod priority;
mod scale;
mod setup;

pub use aggregator::{HierarchyAggregator, RankedAlternative, Ranking};
pub use element::{ElementName, ElementSet};
pub use errors::AhpError;
pub use matrix::{ComparisonMatrix, ConflictPolicy, FinalizedMatrix, JudgmentOutcome, MatrixId};
pub use payload::{MatrixPayload, RawJudgment, ResultsPayload, SetupPayload};
pub use priority::{
    ConsistencyReport, Priority, PriorityEngine, PriorityVector, CONSISTENCY_THRESHOLD,
};
pub use scale::{ScaleCodec, ScaleEntry, ScaleValue, SCALE_TOLERANCE};
pub use setup::Setup;
