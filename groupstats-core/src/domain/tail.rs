use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Which side(s) of the t distribution form the rejection region.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TailMode {
    #[default]
    #[serde(alias = "bilateral")]
    TwoSided,
    LeftTailed,
    RightTailed,
}

impl TailMode {
    pub const ALL: [TailMode; 3] = [TailMode::TwoSided, TailMode::LeftTailed, TailMode::RightTailed];

    pub fn as_str(&self) -> &'static str {
        match self {
            TailMode::TwoSided => "two-sided",
            TailMode::LeftTailed => "left-tailed",
            TailMode::RightTailed => "right-tailed",
        }
    }
}

impl fmt::Display for TailMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TailMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "two-sided" | "bilateral" => Ok(TailMode::TwoSided),
            "left-tailed" => Ok(TailMode::LeftTailed),
            "right-tailed" => Ok(TailMode::RightTailed),
            other => Err(CoreError::invalid(format!(
                "unknown tail mode '{}', expected one of two-sided, left-tailed, right-tailed",
                other
            ))),
        }
    }
}
