//! Step model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::StepStatus;

/// Represents an individual step within a plan.
///
/// Fields are read through accessors; status changes go through
/// [`Plan`](super::Plan) so identity and ordering rules stay in one place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    /// Identifier, unique within the owning plan
    id: String,

    /// Free-text description, possibly empty
    #[serde(default)]
    description: String,

    /// Current status of the step
    #[serde(default)]
    status: StepStatus,

    /// Ordered acceptance criteria
    #[serde(default)]
    acceptance: Vec<String>,
}

impl Step {
    /// A fresh step in the `TODO` state.
    pub(crate) fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        acceptance: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            status: StepStatus::Todo,
            acceptance,
        }
    }

    /// Rebuilds a step from stored fields, keeping the status as stored.
    pub(crate) fn from_parts(
        id: String,
        description: String,
        status: StepStatus,
        acceptance: Vec<String>,
    ) -> Self {
        Self {
            id,
            description,
            status,
            acceptance,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> &StepStatus {
        &self.status
    }

    pub fn acceptance(&self) -> &[String] {
        &self.acceptance
    }

    pub fn is_done(&self) -> bool {
        self.status.is_done()
    }

    /// Heading text: the description, or the id when the description is empty.
    pub fn title(&self) -> &str {
        if self.description.is_empty() {
            &self.id
        } else {
            &self.description
        }
    }

    pub(crate) fn set_status(&mut self, status: StepStatus) {
        self.status = status;
    }
}
