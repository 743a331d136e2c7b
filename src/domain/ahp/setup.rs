//! Decision setup: the criteria and alternatives being compared.

use serde::Serialize;

use super::{AhpError, ElementSet, SetupPayload};

/// Validated criteria and alternatives of a decision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Setup {
    criteria: ElementSet,
    alternatives: ElementSet,
}

impl Setup {
    /// Validates both lists.
    ///
    /// # Errors
    /// `InvalidSetup` when either list has fewer than two names, a blank
    /// name, or a duplicate.
    pub fn new<C, A, S1, S2>(criteria: C, alternatives: A) -> Result<Self, AhpError>
    where
        C: IntoIterator<Item = S1>,
        A: IntoIterator<Item = S2>,
        S1: Into<String>,
        S2: Into<String>,
    {
        Ok(Self {
            criteria: ElementSet::new("criteria", criteria)?,
            alternatives: ElementSet::new("alternatives", alternatives)?,
        })
    }

    pub fn from_payload(payload: &SetupPayload) -> Result<Self, AhpError> {
        Self::new(&payload.criteria, &payload.alternatives)
    }

    pub fn criteria(&self) -> &ElementSet {
        &self.criteria
    }

    pub fn alternatives(&self) -> &ElementSet {
        &self.alternatives
    }

    pub fn to_payload(&self) -> SetupPayload {
        SetupPayload {
            criteria: self.criteria.to_strings(),
            alternatives: self.alternatives.to_strings(),
        }
    }
}
