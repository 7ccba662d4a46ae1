use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed interval `[lower, upper]` on the real line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
}

impl Interval {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Symmetric interval `center ± margin`.
    pub fn around(center: f64, margin: f64) -> Self {
        Self {
            lower: center - margin,
            upper: center + margin,
        }
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.lower, self.upper)
    }
}

/// Percentile bootstrap interval together with the spread of the resampled statistic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BootstrapResult {
    pub interval: Interval,
    /// Population standard deviation (ddof = 0) of the bootstrap distribution.
    pub std_dev: f64,
    pub iterations: usize,
    /// Resamples whose statistic was undefined and were left out of the distribution.
    pub degenerate_draws: usize,
}

impl BootstrapResult {
    /// Number of resamples that contributed to the interval.
    pub fn effective_iterations(&self) -> usize {
        self.iterations - self.degenerate_draws
    }
}

impl fmt::Display for BootstrapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} std = {:.3}", self.interval, self.std_dev)
    }
}
