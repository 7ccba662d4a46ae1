//! Confidence interval for the difference of two means.

use groupstats_core::{Interval, IntervalEstimator, Result, SignificanceLevel};
use serde::{Deserialize, Serialize};
use statrs::distribution::ContinuousCDF;
use tracing::{debug, instrument};

use super::students_t;
use crate::descriptive::PooledSummary;

/// Two-sided `(1 - alpha)` confidence interval for `mean(x) - mean(y)`
/// under equal population variances.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeanDifferenceInterval;

impl IntervalEstimator for MeanDifferenceInterval {
    #[instrument(skip(self, x, y), fields(n1 = x.len(), n2 = y.len()))]
    fn estimate(&self, x: &[f64], y: &[f64], alpha: SignificanceLevel) -> Result<Interval> {
        let pooled = PooledSummary::of(x, y)?;
        let t_crit = students_t(pooled.dof)?.inverse_cdf(1.0 - alpha.half());
        // A zero pooled variance gives a zero-width interval.
        let margin = t_crit * pooled.standard_error();

        debug!(
            difference = pooled.mean_difference(),
            pooled_variance = pooled.pooled_variance,
            t_crit,
            margin,
            "mean difference interval computed"
        );

        Ok(Interval::around(pooled.mean_difference(), margin))
    }
}
