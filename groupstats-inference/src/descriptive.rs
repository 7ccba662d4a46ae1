//! Descriptive quantities shared by the two-sample procedures.

use groupstats_core::{CoreError, Result};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Size, mean and Bessel-corrected variance of one sample.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SampleSummary {
    pub n: usize,
    pub mean: f64,
    pub variance: f64,
}

impl SampleSummary {
    /// Summarise a sample, rejecting inputs whose variance is undefined.
    pub fn of(label: &str, values: &[f64]) -> Result<Self> {
        if values.len() < 2 {
            return Err(CoreError::invalid(format!(
                "sample {} needs at least 2 observations, got {}",
                label,
                values.len()
            )));
        }
        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            return Err(CoreError::invalid(format!(
                "sample {} has a non-finite value at index {}",
                label, pos
            )));
        }

        Ok(Self {
            n: values.len(),
            mean: values.mean(),
            variance: values.variance(),
        })
    }

    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }

    /// Degrees of freedom of the variance estimate.
    pub fn dof(&self) -> f64 {
        (self.n - 1) as f64
    }
}

/// Both samples of an independent two-sample comparison.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PooledSummary {
    pub x: SampleSummary,
    pub y: SampleSummary,
    /// Degrees-of-freedom weighted mean of the two sample variances.
    pub pooled_variance: f64,
    pub dof: f64,
}

impl PooledSummary {
    pub fn of(x: &[f64], y: &[f64]) -> Result<Self> {
        let x = SampleSummary::of("x", x)?;
        let y = SampleSummary::of("y", y)?;
        let dof = x.dof() + y.dof();
        let pooled_variance = (x.dof() * x.variance + y.dof() * y.variance) / dof;

        Ok(Self {
            x,
            y,
            pooled_variance,
            dof,
        })
    }

    pub fn mean_difference(&self) -> f64 {
        self.x.mean - self.y.mean
    }

    /// Standard error of the mean difference under equal population variances.
    pub fn standard_error(&self) -> f64 {
        (self.pooled_variance * (1.0 / self.x.n as f64 + 1.0 / self.y.n as f64)).sqrt()
    }
}

/// Pearson correlation coefficient, `None` when either side is constant.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    // Rounding in the mean leaves constant inputs with a tiny non-zero spread.
    if is_constant(x) || is_constant(y) {
        return None;
    }

    let mean_x = x.mean();
    let mean_y = y.mean();

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;

    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

fn is_constant(values: &[f64]) -> bool {
    values.iter().all(|v| *v == values[0])
}

/// Percentile of already sorted values using linear interpolation between
/// closest ranks. `p` is expressed in percent.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let n = sorted.len();
    let rank = (p / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if lower == upper || upper >= n {
        sorted[lower.min(n - 1)]
    } else {
        let frac = rank - lower as f64;
        sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
}

/// Standard deviation dividing by `n`.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.population_std_dev()
}
