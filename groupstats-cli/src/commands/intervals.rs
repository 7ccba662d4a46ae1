//! Interval estimate commands

use anyhow::{Context as _, Result};
use clap::Args;
use comfy_table::Cell;
use groupstats_core::{BootstrapResult, Interval};
use serde::Serialize;

use crate::cli::SampleArgs;
use crate::context::Context;
use crate::output::{format_value, print_field, print_section, TableDisplay};

/// Arguments for the mean-difference interval
#[derive(Debug, Args)]
pub struct MeanIntervalArgs {
    #[command(flatten)]
    pub samples: SampleArgs,
}

/// Arguments for the bootstrap correlation interval
#[derive(Debug, Args)]
pub struct BootstrapArgs {
    #[command(flatten)]
    pub samples: SampleArgs,

    /// Number of bootstrap resamples; defaults to the configured count
    #[arg(short = 'b', long)]
    pub iterations: Option<usize>,

    /// Seed for reproducible resampling; defaults to the configured seed
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Displayable interval for output
#[derive(Debug, Serialize)]
pub(crate) struct IntervalDisplay {
    pub procedure: &'static str,
    pub confidence: f64,
    #[serde(flatten)]
    pub interval: Interval,
    pub width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std_dev: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degenerate_draws: Option<usize>,
}

impl IntervalDisplay {
    pub(crate) fn mean_difference(interval: Interval, alpha: f64) -> Self {
        Self {
            procedure: "mean difference (x - y)",
            confidence: 1.0 - alpha,
            width: interval.width(),
            interval,
            std_dev: None,
            iterations: None,
            degenerate_draws: None,
        }
    }

    pub(crate) fn bootstrap(result: BootstrapResult, alpha: f64) -> Self {
        Self {
            procedure: "bootstrap correlation",
            confidence: 1.0 - alpha,
            width: result.interval.width(),
            interval: result.interval,
            std_dev: Some(result.std_dev),
            iterations: Some(result.iterations),
            degenerate_draws: Some(result.degenerate_draws),
        }
    }

    fn confidence_label(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }
}

impl TableDisplay for IntervalDisplay {
    fn to_row(&self) -> Vec<Cell> {
        vec![
            Cell::new(self.procedure),
            Cell::new(self.confidence_label()),
            Cell::new(format_value(self.interval.lower)),
            Cell::new(format_value(self.interval.upper)),
            Cell::new(format_value(self.width)),
        ]
    }

    fn display_single(&self) {
        print_section(&format!("Confidence interval: {}", self.procedure));
        print_field("Confidence", &self.confidence_label());
        print_field("Lower", &format_value(self.interval.lower));
        print_field("Upper", &format_value(self.interval.upper));
        print_field("Width", &format_value(self.width));
        if let Some(std_dev) = self.std_dev {
            print_field("Std dev", &format_value(std_dev));
        }
        if let Some(iterations) = self.iterations {
            print_field("Resamples", &iterations.to_string());
        }
        if let Some(degenerate) = self.degenerate_draws.filter(|d| *d > 0) {
            print_field("Excluded", &degenerate.to_string());
        }
    }

    fn display_compact(&self) {
        match self.std_dev {
            Some(std_dev) => println!(
                "{}\t{}\t{}\tstd={}",
                self.confidence_label(),
                format_value(self.interval.lower),
                format_value(self.interval.upper),
                format_value(std_dev)
            ),
            None => println!(
                "{}\t{}\t{}",
                self.confidence_label(),
                format_value(self.interval.lower),
                format_value(self.interval.upper)
            ),
        }
    }
}

/// Execute the mean-difference interval
pub fn mean_interval(ctx: &Context, args: MeanIntervalArgs) -> Result<()> {
    let analyzer = ctx.analyzer()?;

    let samples = &args.samples;
    let interval = analyzer
        .mean_difference_interval(&samples.x, &samples.y, samples.alpha)
        .context("mean-difference interval failed")?;
    let alpha = samples.alpha.unwrap_or(analyzer.config().alpha);

    ctx.output
        .write(&IntervalDisplay::mean_difference(interval, alpha))
}

/// Execute the bootstrap correlation interval
pub fn bootstrap_corr(ctx: &Context, args: BootstrapArgs) -> Result<()> {
    let analyzer = ctx.analyzer_with(|config| {
        if let Some(iterations) = args.iterations {
            config.bootstrap_iterations = iterations;
        }
        if args.seed.is_some() {
            config.seed = args.seed;
        }
    })?;

    let samples = &args.samples;
    let result = analyzer
        .bootstrap_correlation(&samples.x, &samples.y, samples.alpha)
        .context("bootstrap correlation failed")?;
    let alpha = samples.alpha.unwrap_or(analyzer.config().alpha);

    if result.degenerate_draws > 0 {
        ctx.output.warning(&format!(
            "{} of {} resamples had a constant sample and were excluded",
            result.degenerate_draws, result.iterations
        ));
    }

    ctx.output.write(&IntervalDisplay::bootstrap(result, alpha))
}
