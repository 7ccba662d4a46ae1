//! Combined two-group comparison

use anyhow::{Context as _, Result};
use clap::Args;
use comfy_table::Cell;
use groupstats_core::{Interval, TailMode, TestVerdict};
use groupstats_inference::ComparisonReport;
use serde::Serialize;

use crate::cli::SampleArgs;
use crate::context::Context;
use crate::output::{decision_badge, format_p_value, format_value, format_values, TableDisplay};

/// Arguments for the combined comparison
#[derive(Debug, Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub samples: SampleArgs,

    /// Tail mode of the t-test
    #[arg(short, long, default_value = "two-sided")]
    pub tail: TailMode,
}

/// One procedure of a comparison, as a table row
#[derive(Debug, Serialize)]
struct ProcedureRow {
    procedure: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    verdict: Option<TestVerdict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interval: Option<Interval>,
}

impl ProcedureRow {
    fn from_report(report: &ComparisonReport) -> Vec<Self> {
        vec![
            Self {
                procedure: "F-test".to_string(),
                verdict: Some(report.variance_test.clone()),
                interval: None,
            },
            Self {
                procedure: format!("t-test ({})", report.tail),
                verdict: Some(report.mean_test.clone()),
                interval: None,
            },
            Self {
                procedure: format!("{:.1}% CI mean(x) - mean(y)", report.alpha.confidence() * 100.0),
                verdict: None,
                interval: Some(report.mean_difference),
            },
        ]
    }
}

impl TableDisplay for ProcedureRow {
    fn to_row(&self) -> Vec<Cell> {
        match (&self.verdict, &self.interval) {
            (Some(verdict), _) => vec![
                Cell::new(&self.procedure),
                Cell::new(decision_badge(verdict.decision)),
                Cell::new(format_value(verdict.statistic)),
                Cell::new(format_values(&verdict.critical.values())),
                Cell::new(format_p_value(verdict.p_value)),
            ],
            (None, Some(interval)) => vec![
                Cell::new(&self.procedure),
                Cell::new(interval.to_string()),
                Cell::new(format_value(interval.midpoint())),
                Cell::new("-"),
                Cell::new("-"),
            ],
            (None, None) => vec![Cell::new(&self.procedure)],
        }
    }

    fn display_single(&self) {
        self.display_compact();
    }

    fn display_compact(&self) {
        match (&self.verdict, &self.interval) {
            (Some(verdict), _) => println!("{}\t{}", self.procedure, verdict),
            (None, Some(interval)) => println!("{}\t{}", self.procedure, interval),
            (None, None) => println!("{}", self.procedure),
        }
    }
}

/// Execute the combined comparison
pub fn compare(ctx: &Context, args: CompareArgs) -> Result<()> {
    let analyzer = ctx.analyzer()?;

    let samples = &args.samples;
    let report = analyzer
        .compare(&samples.x, &samples.y, samples.alpha, args.tail)
        .context("comparison failed")?;

    let rows = ProcedureRow::from_report(&report);
    ctx.output.write_list(
        &rows,
        &["Procedure", "Result", "Statistic", "Critical", "p-value"],
    )
}
