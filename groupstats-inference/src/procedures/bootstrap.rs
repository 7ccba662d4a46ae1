//! Paired bootstrap interval for the Pearson correlation.

use groupstats_core::{BootstrapResult, CoreError, Interval, Result, SignificanceLevel};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::descriptive::{pearson_correlation, percentile, population_std_dev, SampleSummary};

/// Percentile bootstrap interval for the Pearson correlation of paired samples.
///
/// Each iteration draws one set of `n` indices with replacement and applies it
/// to both `x` and `y`, so every resampled pair is an observed pair. Resamples
/// in which `x` or `y` is constant have no correlation; they are left out of
/// the distribution and counted in [`BootstrapResult::degenerate_draws`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BootstrapCorrelationInterval {
    pub iterations: usize,
}

impl Default for BootstrapCorrelationInterval {
    fn default() -> Self {
        Self {
            iterations: groupstats_core::DEFAULT_BOOTSTRAP_ITERATIONS,
        }
    }
}

impl BootstrapCorrelationInterval {
    pub fn new(iterations: usize) -> Self {
        Self { iterations }
    }

    /// Run with a ChaCha8 generator seeded from `seed`; output is bit-identical
    /// for identical inputs and seed.
    pub fn run_seeded(
        &self,
        x: &[f64],
        y: &[f64],
        alpha: SignificanceLevel,
        seed: u64,
    ) -> Result<BootstrapResult> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.run(x, y, alpha, &mut rng)
    }

    #[instrument(skip(self, x, y, rng), fields(n = x.len(), iterations = self.iterations))]
    pub fn run<R: Rng + ?Sized>(
        &self,
        x: &[f64],
        y: &[f64],
        alpha: SignificanceLevel,
        rng: &mut R,
    ) -> Result<BootstrapResult> {
        if x.len() != y.len() {
            return Err(CoreError::invalid(format!(
                "paired samples must have equal length, got {} and {}",
                x.len(),
                y.len()
            )));
        }
        SampleSummary::of("x", x)?;
        SampleSummary::of("y", y)?;
        if self.iterations == 0 {
            return Err(CoreError::invalid("bootstrap needs at least 1 iteration"));
        }

        let n = x.len();
        let mut xs = Vec::with_capacity(n);
        let mut ys = Vec::with_capacity(n);
        let mut correlations = Vec::with_capacity(self.iterations);
        let mut degenerate_draws = 0;

        for _ in 0..self.iterations {
            xs.clear();
            ys.clear();
            for _ in 0..n {
                let idx = rng.gen_range(0..n);
                xs.push(x[idx]);
                ys.push(y[idx]);
            }

            match pearson_correlation(&xs, &ys) {
                Some(r) => correlations.push(r),
                None => degenerate_draws += 1,
            }
        }

        if correlations.is_empty() {
            return Err(CoreError::degenerate(format!(
                "all {} bootstrap resamples had zero variance",
                self.iterations
            )));
        }
        if degenerate_draws > 0 {
            warn!(degenerate_draws, "excluded resamples with undefined correlation");
        }

        let std_dev = population_std_dev(&correlations);
        correlations.sort_by(|a, b| a.total_cmp(b));

        let lower = percentile(&correlations, 100.0 * alpha.half());
        let upper = percentile(&correlations, 100.0 * (1.0 - alpha.half()));

        debug!(lower, upper, std_dev, "bootstrap distribution summarised");

        Ok(BootstrapResult {
            interval: Interval::new(lower, upper),
            std_dev,
            iterations: self.iterations,
            degenerate_draws,
        })
    }
}
