//! The 17-point reciprocal AHP scale (1/9 .. 1 .. 9).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Absolute tolerance when matching a submitted decimal to a scale constant.
///
/// The comparison UI sends rounded decimals (0.111 for 1/9, 0.143 for 1/7),
/// and the closest pair of constants (1/9 and 1/8) is ~0.014 apart.
pub const SCALE_TOLERANCE: f64 = 1e-3;

const LABELS: [&str; 17] = [
    "1/9", "1/8", "1/7", "1/6", "1/5", "1/4", "1/3", "1/2", "1", "2", "3", "4", "5", "6", "7",
    "8", "9",
];

/// One judgment on the reciprocal scale.
///
/// Stored as an intensity (1..=9) plus a direction so that reciprocals are
/// exact: `1/7` is intensity 7 inverted, never the float 0.142857...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ScaleValue {
    intensity: u8,
    inverse: bool,
}

impl ScaleValue {
    /// Equal importance (1).
    pub const EQUAL: ScaleValue = ScaleValue {
        intensity: 1,
        inverse: false,
    };

    /// All 17 values in ascending numeric order.
    pub const ALL: [ScaleValue; 17] = [
        Self::inverted(9),
        Self::inverted(8),
        Self::inverted(7),
        Self::inverted(6),
        Self::inverted(5),
        Self::inverted(4),
        Self::inverted(3),
        Self::inverted(2),
        Self::EQUAL,
        Self::favouring(2),
        Self::favouring(3),
        Self::favouring(4),
        Self::favouring(5),
        Self::favouring(6),
        Self::favouring(7),
        Self::favouring(8),
        Self::favouring(9),
    ];

    const fn favouring(intensity: u8) -> Self {
        Self {
            intensity,
            inverse: false,
        }
    }

    const fn inverted(intensity: u8) -> Self {
        Self {
            intensity,
            inverse: true,
        }
    }

    /// Creates a value from an intensity (1..=9); `inverse` selects `1/intensity`.
    pub fn from_intensity(intensity: u8, inverse: bool) -> Option<Self> {
        match intensity {
            1 => Some(Self::EQUAL),
            2..=9 => Some(Self { intensity, inverse }),
            _ => None,
        }
    }

    /// Snaps a decimal to the scale constant within [`SCALE_TOLERANCE`].
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| (candidate.value() - value).abs() <= SCALE_TOLERANCE)
    }

    /// Parses a canonical label such as `"1/7"` or `"5"`.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        LABELS
            .iter()
            .position(|l| *l == label)
            .map(|idx| Self::ALL[idx])
    }

    /// Parses text that is either a label or a decimal.
    pub fn parse(text: &str) -> Option<Self> {
        Self::from_label(text).or_else(|| {
            text.trim()
                .parse::<f64>()
                .ok()
                .and_then(Self::from_f64)
        })
    }

    /// Returns the numeric value.
    pub fn value(&self) -> f64 {
        if self.inverse {
            1.0 / f64::from(self.intensity)
        } else {
            f64::from(self.intensity)
        }
    }

    /// Returns the canonical display label.
    pub fn label(&self) -> &'static str {
        LABELS[self.index()]
    }

    /// Returns the intensity of preference, 1 (equal) to 9 (extreme).
    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    /// Returns the judgment for the reverse comparison.
    pub fn reciprocal(&self) -> Self {
        if self.intensity == 1 {
            *self
        } else {
            Self {
                intensity: self.intensity,
                inverse: !self.inverse,
            }
        }
    }

    fn index(&self) -> usize {
        let intensity = usize::from(self.intensity);
        if self.inverse {
            9 - intensity
        } else {
            7 + intensity
        }
    }
}

impl Default for ScaleValue {
    fn default() -> Self {
        Self::EQUAL
    }
}

impl PartialOrd for ScaleValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScaleValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index().cmp(&other.index())
    }
}

impl TryFrom<f64> for ScaleValue {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value).ok_or_else(|| {
            ValidationError::invalid_format("value", format!("{} is not on the 1/9..9 scale", value))
        })
    }
}

impl From<ScaleValue> for f64 {
    fn from(value: ScaleValue) -> Self {
        value.value()
    }
}

impl fmt::Display for ScaleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A scale constant paired with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaleEntry {
    pub label: &'static str,
    pub value: f64,
}

/// Maps the reciprocal scale between labels and numbers.
pub struct ScaleCodec;

impl ScaleCodec {
    /// Returns the 17 allowed values in ascending order.
    pub fn allowed_values() -> Vec<ScaleEntry> {
        ScaleValue::ALL
            .iter()
            .map(|v| ScaleEntry {
                label: v.label(),
                value: v.value(),
            })
            .collect()
    }

    /// True iff `value` matches a scale constant within [`SCALE_TOLERANCE`].
    pub fn is_valid(value: f64) -> bool {
        ScaleValue::from_f64(value).is_some()
    }

    /// Decodes a decimal into its canonical scale value.
    pub fn decode(value: f64) -> Option<ScaleValue> {
        ScaleValue::from_f64(value)
    }
}
