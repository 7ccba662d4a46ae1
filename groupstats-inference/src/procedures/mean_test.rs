//! Pooled-variance two-sample t-test.

use groupstats_core::{
    CoreError, CriticalRegion, Decision, HypothesisTest, Result, SignificanceLevel, TailMode,
    TestKind, TestVerdict,
};
use serde::{Deserialize, Serialize};
use statrs::distribution::ContinuousCDF;
use tracing::{debug, instrument};

use super::students_t;
use crate::descriptive::PooledSummary;

/// Pooled-variance two-sample t-test of equal means.
///
/// Equal population variances are assumed, not checked. The critical values
/// per tail mode are:
///
/// - two-sided: `t(alpha/2)` and `t(1 - alpha/2)`, reject outside them;
/// - left-tailed: `t(1 - alpha)`, reject below it;
/// - right-tailed: `t(alpha)`, reject above it.
///
/// The one-sided quantiles reproduce the reference analysis as published.
/// The reported p-value uses the conventional alternative for each tail and
/// does not take part in the decision.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TwoSampleMeanTest {
    pub tail: TailMode,
}

impl TwoSampleMeanTest {
    pub fn new(tail: TailMode) -> Self {
        Self { tail }
    }

    pub fn two_sided() -> Self {
        Self::new(TailMode::TwoSided)
    }

    /// Observed t statistic and its degrees of freedom.
    pub fn statistic(x: &[f64], y: &[f64]) -> Result<(f64, f64)> {
        let pooled = PooledSummary::of(x, y)?;
        if pooled.pooled_variance == 0.0 {
            return Err(CoreError::degenerate(
                "t statistic undefined: pooled variance is zero",
            ));
        }
        Ok((pooled.mean_difference() / pooled.standard_error(), pooled.dof))
    }
}

impl HypothesisTest for TwoSampleMeanTest {
    #[instrument(skip(self, x, y), fields(n1 = x.len(), n2 = y.len(), tail = %self.tail))]
    fn test(&self, x: &[f64], y: &[f64], alpha: SignificanceLevel) -> Result<TestVerdict> {
        let (t_obs, dof) = Self::statistic(x, y)?;
        let dist = students_t(dof)?;

        let (critical, p_value) = match self.tail {
            TailMode::TwoSided => (
                CriticalRegion::Acceptance {
                    lower: dist.inverse_cdf(alpha.half()),
                    upper: dist.inverse_cdf(1.0 - alpha.half()),
                },
                2.0 * (1.0 - dist.cdf(t_obs.abs())),
            ),
            TailMode::LeftTailed => (
                CriticalRegion::Below {
                    bound: dist.inverse_cdf(1.0 - alpha.value()),
                },
                dist.cdf(t_obs),
            ),
            TailMode::RightTailed => (
                CriticalRegion::Above {
                    bound: dist.inverse_cdf(alpha.value()),
                },
                1.0 - dist.cdf(t_obs),
            ),
        };

        debug!(t_obs, dof, critical = ?critical.values(), "t statistic computed");

        Ok(TestVerdict {
            kind: TestKind::TTest,
            decision: Decision::from_rejection(critical.rejects(t_obs)),
            statistic: t_obs,
            critical,
            df1: dof,
            df2: None,
            p_value,
        })
    }
}
