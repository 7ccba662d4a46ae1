use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, Result};

/// Significance level of a test, strictly inside (0, 1).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(try_from = "f64", into = "f64")]
pub struct SignificanceLevel(f64);

impl SignificanceLevel {
    pub const FIVE_PERCENT: SignificanceLevel = SignificanceLevel(0.05);

    pub fn new(alpha: f64) -> Result<Self> {
        if alpha.is_finite() && alpha > 0.0 && alpha < 1.0 {
            Ok(Self(alpha))
        } else {
            Err(CoreError::invalid(format!(
                "significance level must lie in (0, 1), got {}",
                alpha
            )))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Confidence level `1 - alpha` of the matching two-sided interval.
    pub fn confidence(&self) -> f64 {
        1.0 - self.0
    }

    /// Probability mass left in each tail of a two-sided procedure.
    pub fn half(&self) -> f64 {
        self.0 / 2.0
    }
}

impl Default for SignificanceLevel {
    fn default() -> Self {
        Self::FIVE_PERCENT
    }
}

impl fmt::Display for SignificanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for SignificanceLevel {
    type Error = CoreError;

    fn try_from(alpha: f64) -> Result<Self> {
        Self::new(alpha)
    }
}

impl From<SignificanceLevel> for f64 {
    fn from(alpha: SignificanceLevel) -> Self {
        alpha.0
    }
}
