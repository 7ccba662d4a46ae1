use crate::domain::{Interval, SignificanceLevel, TestVerdict};
use crate::error::Result;

/// A two-sample hypothesis test that reaches a reject / fail-to-reject decision.
pub trait HypothesisTest {
    fn test(&self, x: &[f64], y: &[f64], alpha: SignificanceLevel) -> Result<TestVerdict>;
}

/// A two-sample procedure that produces a confidence interval.
pub trait IntervalEstimator {
    fn estimate(&self, x: &[f64], y: &[f64], alpha: SignificanceLevel) -> Result<Interval>;
}
