//! Plan summary types and functionality.

use serde::{Deserialize, Serialize};

use super::{Plan, PlanStatus};

/// Listing entry for a stored plan with step statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanSummary {
    /// Storage name of the plan
    pub name: String,
    /// `DONE` when every step is done (or there are none)
    pub status: PlanStatus,
    /// Total number of steps
    #[serde(rename = "total_tasks")]
    pub total_steps: usize,
    /// Number of completed steps
    #[serde(rename = "completed_tasks")]
    pub completed_steps: usize,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        let status = if plan.is_completed() {
            PlanStatus::Done
        } else {
            PlanStatus::Todo
        };

        Self {
            name: plan.name().to_string(),
            status,
            total_steps: plan.len(),
            completed_steps: plan.completed_steps(),
        }
    }
}
