//! Named elements (criteria or alternatives) and ordered element sets.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::AhpError;
use crate::domain::foundation::ValidationError;

/// Name of a criterion or alternative. Trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ElementName(String);

impl ElementName {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("element name"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ElementName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ElementName> for String {
    fn from(name: ElementName) -> Self {
        name.0
    }
}

impl AsRef<str> for ElementName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered set of at least two uniquely named elements.
///
/// Position in the set is the row/column index of every matrix built
/// over it, and the order in which results are reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ElementSet {
    names: Vec<ElementName>,
}

impl ElementSet {
    /// Minimum number of elements for a pairwise comparison.
    pub const MIN_LEN: usize = 2;

    /// Builds a set, rejecting blanks, duplicates and sets smaller than two.
    ///
    /// `kind` names the set in error messages ("criteria", "alternatives").
    pub fn new<I, S>(kind: &str, names: I) -> Result<Self, AhpError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut validated: Vec<ElementName> = Vec::new();
        for raw in names {
            let name = ElementName::new(raw)
                .map_err(|_| AhpError::invalid_setup(format!("{} contain a blank name", kind)))?;
            if validated.contains(&name) {
                return Err(AhpError::invalid_setup(format!(
                    "{} contain '{}' more than once",
                    kind, name
                )));
            }
            validated.push(name);
        }

        if validated.len() < Self::MIN_LEN {
            return Err(AhpError::invalid_setup(format!(
                "at least {} {} are required, got {}",
                Self::MIN_LEN,
                kind,
                validated.len()
            )));
        }

        Ok(Self { names: validated })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Row/column index of `name`, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.names.iter().position(|n| n.as_str() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    pub fn get(&self, index: usize) -> Option<&ElementName> {
        self.names.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementName> {
        self.names.iter()
    }

    pub fn as_slice(&self) -> &[ElementName] {
        &self.names
    }

    /// Names as plain strings, in set order.
    pub fn to_strings(&self) -> Vec<String> {
        self.names.iter().map(|n| n.to_string()).collect()
    }
}

impl std::ops::Index<usize> for ElementSet {
    type Output = ElementName;

    fn index(&self, index: usize) -> &Self::Output {
        &self.names[index]
    }
}
