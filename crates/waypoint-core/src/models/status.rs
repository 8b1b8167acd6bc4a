//! Status enumerations for plans and steps.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Completion state of a step.
///
/// Only `TODO` and `DONE` are produced by this crate. Records written by other
/// tools may carry any string; such values are kept verbatim in [`Other`] so
/// they survive a load/save cycle, and count as not done.
///
/// [`Other`]: StepStatus::Other
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StepStatus {
    /// Step is pending completion
    #[default]
    Todo,

    /// Step has been completed
    Done,

    /// Unrecognized stored value
    Other(String),
}

impl StepStatus {
    /// Canonical stored form. `Other` values come back exactly as read.
    pub fn as_str(&self) -> &str {
        match self {
            StepStatus::Todo => "TODO",
            StepStatus::Done => "DONE",
            StepStatus::Other(raw) => raw,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, StepStatus::Done)
    }
}

impl From<&str> for StepStatus {
    fn from(s: &str) -> Self {
        if s.eq_ignore_ascii_case("done") {
            StepStatus::Done
        } else if s.eq_ignore_ascii_case("todo") {
            StepStatus::Todo
        } else {
            StepStatus::Other(s.to_string())
        }
    }
}

impl From<String> for StepStatus {
    fn from(s: String) -> Self {
        match StepStatus::from(s.as_str()) {
            StepStatus::Other(_) => StepStatus::Other(s),
            known => known,
        }
    }
}

impl From<StepStatus> for String {
    fn from(status: StepStatus) -> Self {
        match status {
            StepStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for StepStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(StepStatus::from(s))
    }
}

/// Aggregate completion state of a plan, as reported by listings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlanStatus {
    /// At least one step is not done
    #[default]
    Todo,

    /// Every step is done, or the plan has no steps
    Done,
}

impl PlanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Todo => "TODO",
            PlanStatus::Done => "DONE",
        }
    }
}
