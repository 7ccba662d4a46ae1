//! Configuration-driven entry point running the procedures.

use groupstats_core::{
    AnalysisConfig, BootstrapResult, HypothesisTest, Interval, IntervalEstimator, Result,
    SignificanceLevel, TailMode, TestVerdict,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::procedures::{
    BootstrapCorrelationInterval, MeanDifferenceInterval, TwoSampleMeanTest, VarianceRatioTest,
};

/// Independent-sample procedures run on the same pair of groups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonReport {
    pub alpha: SignificanceLevel,
    pub tail: TailMode,
    pub variance_test: TestVerdict,
    pub mean_test: TestVerdict,
    pub mean_difference: Interval,
}

/// Runs the two-sample procedures with settings taken from an [`AnalysisConfig`].
#[derive(Debug, Clone, Default)]
pub struct TwoSampleAnalyzer {
    config: AnalysisConfig,
}

impl TwoSampleAnalyzer {
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        Ok(Self {
            config: config.validated()?,
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    fn alpha(&self, alpha: Option<f64>) -> Result<SignificanceLevel> {
        match alpha {
            Some(a) => SignificanceLevel::new(a),
            None => self.config.significance(),
        }
    }

    pub fn variance_test(&self, x: &[f64], y: &[f64], alpha: Option<f64>) -> Result<TestVerdict> {
        VarianceRatioTest::new(self.config.denominator_df).test(x, y, self.alpha(alpha)?)
    }

    pub fn mean_test(
        &self,
        x: &[f64],
        y: &[f64],
        alpha: Option<f64>,
        tail: TailMode,
    ) -> Result<TestVerdict> {
        TwoSampleMeanTest::new(tail).test(x, y, self.alpha(alpha)?)
    }

    pub fn mean_difference_interval(
        &self,
        x: &[f64],
        y: &[f64],
        alpha: Option<f64>,
    ) -> Result<Interval> {
        MeanDifferenceInterval.estimate(x, y, self.alpha(alpha)?)
    }

    /// Bootstrap with the configured iteration count. Without a configured seed
    /// the thread-local generator is used and results are not reproducible.
    pub fn bootstrap_correlation(
        &self,
        x: &[f64],
        y: &[f64],
        alpha: Option<f64>,
    ) -> Result<BootstrapResult> {
        let alpha = self.alpha(alpha)?;
        let bootstrap = BootstrapCorrelationInterval::new(self.config.bootstrap_iterations);
        match self.config.seed {
            Some(seed) => bootstrap.run_seeded(x, y, alpha, seed),
            None => bootstrap.run(x, y, alpha, &mut rand::thread_rng()),
        }
    }

    pub fn compare(
        &self,
        x: &[f64],
        y: &[f64],
        alpha: Option<f64>,
        tail: TailMode,
    ) -> Result<ComparisonReport> {
        let level = self.alpha(alpha)?;
        info!(n1 = x.len(), n2 = y.len(), alpha = %level, %tail, "comparing groups");

        Ok(ComparisonReport {
            alpha: level,
            tail,
            variance_test: VarianceRatioTest::new(self.config.denominator_df).test(x, y, level)?,
            mean_test: TwoSampleMeanTest::new(tail).test(x, y, level)?,
            mean_difference: MeanDifferenceInterval.estimate(x, y, level)?,
        })
    }
}
