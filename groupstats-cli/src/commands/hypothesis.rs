//! Hypothesis test commands

use anyhow::{Context as _, Result};
use clap::Args;
use comfy_table::Cell;
use groupstats_core::{DenominatorDf, TailMode, TestKind, TestVerdict};
use serde::Serialize;
use tracing::debug;

use crate::cli::SampleArgs;
use crate::context::Context;
use crate::output::{
    decision_badge, format_p_value, format_value, format_values, print_field,
    print_optional_field, print_section, TableDisplay,
};

/// Arguments for the variance-ratio F-test
#[derive(Debug, Args)]
pub struct VarTestArgs {
    #[command(flatten)]
    pub samples: SampleArgs,

    /// Denominator degrees of freedom: reference (n - 2) or conventional (n - 1)
    #[arg(long)]
    pub df_convention: Option<DenominatorDf>,
}

/// Arguments for the pooled t-test
#[derive(Debug, Args)]
pub struct TTestArgs {
    #[command(flatten)]
    pub samples: SampleArgs,

    /// Tail mode: two-sided, left-tailed or right-tailed
    #[arg(short, long, default_value = "two-sided")]
    pub tail: TailMode,
}

/// Displayable verdict for output
#[derive(Debug, Serialize)]
pub(crate) struct VerdictDisplay {
    pub alpha: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tail: Option<TailMode>,
    #[serde(flatten)]
    pub verdict: TestVerdict,
    pub summary: String,
}

impl VerdictDisplay {
    pub(crate) fn new(verdict: TestVerdict, alpha: f64, tail: Option<TailMode>) -> Self {
        Self {
            alpha,
            tail,
            summary: verdict.to_string(),
            verdict,
        }
    }

    fn title(&self) -> &'static str {
        match self.verdict.kind {
            TestKind::FTest => "F-test (equal variances)",
            TestKind::TTest => "t-test (equal means, pooled variance)",
        }
    }

    fn degrees_of_freedom(&self) -> String {
        match self.verdict.df2 {
            Some(df2) => format!("({}, {})", self.verdict.df1, df2),
            None => self.verdict.df1.to_string(),
        }
    }
}

impl TableDisplay for VerdictDisplay {
    fn to_row(&self) -> Vec<Cell> {
        vec![
            Cell::new(self.title()),
            Cell::new(decision_badge(self.verdict.decision)),
            Cell::new(format_value(self.verdict.statistic)),
            Cell::new(format_values(&self.verdict.critical.values())),
            Cell::new(format_p_value(self.verdict.p_value)),
        ]
    }

    fn display_single(&self) {
        print_section(self.title());
        print_field("Decision", &decision_badge(self.verdict.decision));
        print_optional_field("Tail", self.tail.map(|t| t.as_str()));
        print_field("Alpha", &self.alpha.to_string());
        print_field(
            self.verdict.kind.statistic_name(),
            &format_value(self.verdict.statistic),
        );
        print_field("Critical", &format_values(&self.verdict.critical.values()));
        print_field("DoF", &self.degrees_of_freedom());
        print_field("p-value", &format_p_value(self.verdict.p_value));
        println!("\n  {}", self.summary);
    }

    fn display_compact(&self) {
        println!("{}", self.summary);
    }
}

/// Execute the variance-ratio F-test
pub fn var_test(ctx: &Context, args: VarTestArgs) -> Result<()> {
    let analyzer = ctx.analyzer_with(|config| {
        if let Some(convention) = args.df_convention {
            config.denominator_df = convention;
        }
    })?;
    debug!(convention = %analyzer.config().denominator_df, "running variance-ratio test");

    let samples = &args.samples;
    let verdict = analyzer
        .variance_test(&samples.x, &samples.y, samples.alpha)
        .context("F-test failed")?;
    let alpha = samples.alpha.unwrap_or(analyzer.config().alpha);

    ctx.output.write(&VerdictDisplay::new(verdict, alpha, None))
}

/// Execute the pooled two-sample t-test
pub fn t_test(ctx: &Context, args: TTestArgs) -> Result<()> {
    let analyzer = ctx.analyzer()?;

    let samples = &args.samples;
    let verdict = analyzer
        .mean_test(&samples.x, &samples.y, samples.alpha, args.tail)
        .context("t-test failed")?;
    let alpha = samples.alpha.unwrap_or(analyzer.config().alpha);

    ctx.output
        .write(&VerdictDisplay::new(verdict, alpha, Some(args.tail)))
}
