//! Command-line argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{compare::CompareArgs, config::ConfigCommands, hypothesis, intervals};
use crate::output::OutputFormat;

/// Two-sample hypothesis tests and interval estimates
#[derive(Debug, Parser)]
#[command(name = "groupstats", version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true, env = "GROUPSTATS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// F-test for equality of two variances
    VarTest(hypothesis::VarTestArgs),

    /// Pooled two-sample t-test for equality of means
    TTest(hypothesis::TTestArgs),

    /// Confidence interval for the difference of two means
    MeanInterval(intervals::MeanIntervalArgs),

    /// Bootstrap confidence interval for the correlation of paired samples
    BootstrapCorr(intervals::BootstrapArgs),

    /// Run the F-test, t-test and mean-difference interval together
    Compare(CompareArgs),

    /// Inspect configuration
    Config(ConfigCommands),
}

/// The two samples and significance level shared by every procedure
#[derive(Debug, Clone, Args)]
pub struct SampleArgs {
    /// First sample, comma-separated
    #[arg(short = 'x', long = "sample-x", value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub x: Vec<f64>,

    /// Second sample, comma-separated
    #[arg(short = 'y', long = "sample-y", value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub y: Vec<f64>,

    /// Significance level in (0, 1); defaults to the configured alpha
    #[arg(short, long)]
    pub alpha: Option<f64>,
}
