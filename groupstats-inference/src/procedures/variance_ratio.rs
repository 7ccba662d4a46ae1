//! F-test for equality of two variances.

use groupstats_core::{
    CoreError, CriticalRegion, Decision, DenominatorDf, HypothesisTest, Result,
    SignificanceLevel, TestKind, TestVerdict,
};
use serde::{Deserialize, Serialize};
use statrs::distribution::ContinuousCDF;
use tracing::{debug, instrument};

use super::fisher_snedecor;
use crate::descriptive::SampleSummary;

/// Two-sided F-test of equal population variances.
///
/// The larger sample variance always goes in the numerator so the observed
/// ratio is at least 1. The numerator degrees of freedom are `n - 1` of that
/// sample; the denominator degrees of freedom follow [`DenominatorDf`], which
/// defaults to the reference `n - 2` rather than the textbook `n - 1`.
///
/// When both variances are exactly equal, `x` is taken as the numerator and
/// the observed ratio is 1, which sits inside the acceptance region for any
/// `alpha <= 0.5`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VarianceRatioTest {
    pub denominator_df: DenominatorDf,
}

impl VarianceRatioTest {
    pub fn new(denominator_df: DenominatorDf) -> Self {
        Self { denominator_df }
    }

    pub fn conventional() -> Self {
        Self::new(DenominatorDf::Conventional)
    }
}

impl HypothesisTest for VarianceRatioTest {
    #[instrument(skip(self, x, y), fields(n1 = x.len(), n2 = y.len(), convention = %self.denominator_df))]
    fn test(&self, x: &[f64], y: &[f64], alpha: SignificanceLevel) -> Result<TestVerdict> {
        let sx = SampleSummary::of("x", x)?;
        let sy = SampleSummary::of("y", y)?;

        if sx.variance == 0.0 || sy.variance == 0.0 {
            return Err(CoreError::degenerate(format!(
                "variance ratio undefined: sample variances are {} and {}",
                sx.variance, sy.variance
            )));
        }

        let (numerator, denominator) = if sy.variance > sx.variance {
            (sy, sx)
        } else {
            (sx, sy)
        };

        let offset = self.denominator_df.offset();
        if denominator.n <= offset {
            return Err(CoreError::invalid(format!(
                "the {} convention needs at least {} observations in the lower-variance sample, got {}",
                self.denominator_df,
                offset + 1,
                denominator.n
            )));
        }

        let f_obs = numerator.variance / denominator.variance;
        let df1 = numerator.dof();
        let df2 = (denominator.n - offset) as f64;

        let forward = fisher_snedecor(df1, df2)?;
        let reverse = fisher_snedecor(df2, df1)?;
        let upper = forward.inverse_cdf(1.0 - alpha.half());
        let lower = 1.0 / reverse.inverse_cdf(1.0 - alpha.half());

        let cdf = forward.cdf(f_obs);
        let p_value = (2.0 * cdf.min(1.0 - cdf)).min(1.0);

        debug!(
            s2_x = sx.variance,
            s2_y = sy.variance,
            f_obs,
            df1,
            df2,
            lower,
            upper,
            "variance ratio computed"
        );

        let critical = CriticalRegion::Acceptance { lower, upper };

        Ok(TestVerdict {
            kind: TestKind::FTest,
            decision: Decision::from_rejection(critical.rejects(f_obs)),
            statistic: f_obs,
            critical,
            df1,
            df2: Some(df2),
            p_value,
        })
    }
}
