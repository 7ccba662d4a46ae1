use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a hypothesis test with respect to its null hypothesis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Reject,
    FailToReject,
}

impl Decision {
    pub fn from_rejection(rejected: bool) -> Self {
        if rejected {
            Decision::Reject
        } else {
            Decision::FailToReject
        }
    }

    pub fn is_reject(&self) -> bool {
        matches!(self, Decision::Reject)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Reject => write!(f, "Reject H0"),
            Decision::FailToReject => write!(f, "Fail to reject H0"),
        }
    }
}

/// Critical value(s) a statistic was compared against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CriticalRegion {
    /// H0 is kept while the statistic stays inside `[lower, upper]`.
    Acceptance { lower: f64, upper: f64 },
    /// H0 is rejected when the statistic falls below the bound.
    Below { bound: f64 },
    /// H0 is rejected when the statistic exceeds the bound.
    Above { bound: f64 },
}

impl CriticalRegion {
    pub fn rejects(&self, statistic: f64) -> bool {
        match *self {
            CriticalRegion::Acceptance { lower, upper } => statistic < lower || statistic > upper,
            CriticalRegion::Below { bound } => statistic < bound,
            CriticalRegion::Above { bound } => statistic > bound,
        }
    }

    /// Critical values in ascending order of appearance in the report.
    pub fn values(&self) -> Vec<f64> {
        match *self {
            CriticalRegion::Acceptance { lower, upper } => vec![lower, upper],
            CriticalRegion::Below { bound } | CriticalRegion::Above { bound } => vec![bound],
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TestKind {
    /// Variance-ratio F-test.
    FTest,
    /// Pooled two-sample Student's t-test.
    TTest,
}

impl TestKind {
    pub fn statistic_name(&self) -> &'static str {
        match self {
            TestKind::FTest => "F_obs",
            TestKind::TTest => "T_obs",
        }
    }
}

/// Structured result of a hypothesis test.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestVerdict {
    pub kind: TestKind,
    pub decision: Decision,
    pub statistic: f64,
    pub critical: CriticalRegion,
    pub df1: f64,
    pub df2: Option<f64>,
    pub p_value: f64,
}

impl TestVerdict {
    pub fn is_reject(&self) -> bool {
        self.decision.is_reject()
    }
}

impl fmt::Display for TestVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TestKind::FTest => {
                let conclusion = match self.decision {
                    Decision::Reject => "The variances are not equal",
                    Decision::FailToReject => "The variances are equal",
                };
                write!(f, "{}: {} (F_obs = {:.3}", self.decision, conclusion, self.statistic)?;
                if let CriticalRegion::Acceptance { lower, upper } = self.critical {
                    write!(f, ", f1 = {:.3}, f2 = {:.3}", lower, upper)?;
                }
                write!(f, ")")
            }
            TestKind::TTest => {
                write!(f, "{}: T_obs = {:.3}", self.decision, self.statistic)?;
                match self.critical {
                    CriticalRegion::Acceptance { lower, upper } => {
                        write!(f, ", tc1 = {:.3}, tc2 = {:.3}", lower, upper)
                    }
                    CriticalRegion::Below { bound } | CriticalRegion::Above { bound } => {
                        write!(f, ", tc = {:.3}", bound)
                    }
                }
            }
        }
    }
}
