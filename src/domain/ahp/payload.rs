//! Loosely-typed judgment payloads as submitted by clients.
//!
//! These shapes mirror what the comparison UI posts. They are converted
//! into validated matrices exactly once, at ingestion.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::ScaleValue;

/// A single submitted cell value: a JSON number, or a string holding a
/// decimal ("0.333") or a label ("1/3").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawJudgment {
    Number(f64),
    Text(String),
}

impl RawJudgment {
    /// Numeric reading of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawJudgment::Number(n) => Some(*n),
            RawJudgment::Text(text) => ScaleValue::from_label(text)
                .map(|v| v.value())
                .or_else(|| text.trim().parse::<f64>().ok()),
        }
    }

    /// Canonical scale value, if the submission is on the scale.
    pub fn to_scale(&self) -> Option<ScaleValue> {
        match self {
            RawJudgment::Number(n) => ScaleValue::from_f64(*n),
            RawJudgment::Text(text) => ScaleValue::parse(text),
        }
    }
}

impl From<f64> for RawJudgment {
    fn from(value: f64) -> Self {
        RawJudgment::Number(value)
    }
}

impl From<&str> for RawJudgment {
    fn from(value: &str) -> Self {
        RawJudgment::Text(value.to_string())
    }
}

impl fmt::Display for RawJudgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawJudgment::Number(n) => write!(f, "{}", n),
            RawJudgment::Text(text) => write!(f, "\"{}\"", text),
        }
    }
}

/// `{row: {col: value}}` for one comparison matrix.
pub type MatrixPayload = BTreeMap<String, BTreeMap<String, RawJudgment>>;

/// Setup submission: the criteria and alternatives of a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupPayload {
    pub criteria: Vec<String>,
    pub alternatives: Vec<String>,
}

/// Results submission: every matrix of a decision at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsPayload {
    #[serde(default)]
    pub criteria_matrix: MatrixPayload,
    /// Keyed by criterion name.
    #[serde(default)]
    pub alternative_matrices: BTreeMap<String, MatrixPayload>,
}
