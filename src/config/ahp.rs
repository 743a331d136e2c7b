//! Pairwise comparison settings

use serde::Deserialize;

use crate::domain::ahp::ConflictPolicy;

/// Settings applied to newly created runs
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AhpConfig {
    /// How a differing second judgment for the same pair is handled
    #[serde(default)]
    pub conflict_policy: ConflictPolicy,
}
