//! Plan model definition and the in-memory mutation API.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{Step, StepStatus};
use crate::error::{PlanError, Result};

/// A named, ordered list of steps.
///
/// Plans are obtained from [`PlanManager::create`] or [`PlanManager::get`],
/// mutated through the methods below, and made durable with
/// [`PlanManager::save`]. The storage name is assigned by the manager and is
/// not part of the serialized record.
///
/// [`PlanManager::create`]: crate::PlanManager::create
/// [`PlanManager::get`]: crate::PlanManager::get
/// [`PlanManager::save`]: crate::PlanManager::save
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    /// Public identifier, conventionally equal to the name
    id: String,

    /// Storage key, set once by the manager
    #[serde(skip)]
    name: String,

    /// Steps in execution order
    #[serde(default)]
    steps: Vec<Step>,
}

impl Plan {
    /// An empty plan whose id and name are both `name`.
    pub(crate) fn new(name: &str) -> Self {
        Self {
            id: name.to_string(),
            name: name.to_string(),
            steps: Vec::new(),
        }
    }

    /// Rebuilds an unnamed plan from stored fields.
    pub(crate) fn from_parts(id: String, steps: Vec<Step>) -> Self {
        Self {
            id,
            name: String::new(),
            steps,
        }
    }

    /// Attaches the storage name a record was loaded under.
    pub(crate) fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Storage key; empty for plans that did not come from a manager.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|step| step.id() == id)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn completed_steps(&self) -> usize {
        self.steps.iter().filter(|step| step.is_done()).count()
    }

    /// Appends a `TODO` step.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::DuplicateStep`] if a step with `id` already exists,
    /// and [`PlanError::InvalidInput`] for an empty id. The plan is unchanged
    /// on error.
    pub fn add_step(
        &mut self,
        id: impl Into<String>,
        description: impl Into<String>,
        acceptance: Vec<String>,
    ) -> Result<()> {
        let id = id.into();
        if id.is_empty() {
            return Err(PlanError::invalid_input("id").with_reason("Step id must not be empty"));
        }
        if self.step(&id).is_some() {
            return Err(PlanError::DuplicateStep { id });
        }

        self.steps.push(Step::new(id, description, acceptance));
        Ok(())
    }

    /// Removes every step whose id is listed. Unknown ids are ignored.
    ///
    /// Returns the number of steps removed.
    pub fn remove_steps<S: AsRef<str>>(&mut self, ids: &[S]) -> usize {
        let doomed: HashSet<&str> = ids.iter().map(AsRef::as_ref).collect();
        let before = self.steps.len();
        self.steps.retain(|step| !doomed.contains(step.id()));
        before - self.steps.len()
    }

    /// Replaces the step order with `ids`.
    ///
    /// # Errors
    ///
    /// `ids` must be a permutation of the current step ids; anything else
    /// yields [`PlanError::InvalidInput`] and leaves the order untouched.
    pub fn reorder<S: AsRef<str>>(&mut self, ids: &[S]) -> Result<()> {
        if ids.len() != self.steps.len() {
            return Err(PlanError::invalid_input("ids").with_reason(format!(
                "Expected {} step ids, got {}",
                self.steps.len(),
                ids.len()
            )));
        }

        let mut positions: HashMap<&str, usize> = HashMap::with_capacity(ids.len());
        for (position, id) in ids.iter().enumerate() {
            let id = id.as_ref();
            if self.step(id).is_none() {
                return Err(PlanError::invalid_input("ids")
                    .with_reason(format!("Unknown step id '{id}'")));
            }
            if positions.insert(id, position).is_some() {
                return Err(PlanError::invalid_input("ids")
                    .with_reason(format!("Step id '{id}' listed more than once")));
            }
        }

        self.steps
            .sort_by_cached_key(|step| positions.get(step.id()).copied().unwrap_or(usize::MAX));
        Ok(())
    }

    /// Sets the step's status to `DONE`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::StepNotFound`] if no step has this id.
    pub fn mark_as_completed(&mut self, step_id: &str) -> Result<()> {
        self.set_step_status(step_id, StepStatus::Done)
    }

    /// Sets the step's status to `TODO`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::StepNotFound`] if no step has this id.
    pub fn mark_as_incomplete(&mut self, step_id: &str) -> Result<()> {
        self.set_step_status(step_id, StepStatus::Todo)
    }

    fn set_step_status(&mut self, step_id: &str, status: StepStatus) -> Result<()> {
        let step = self
            .steps
            .iter_mut()
            .find(|step| step.id() == step_id)
            .ok_or_else(|| PlanError::StepNotFound {
                id: step_id.to_string(),
            })?;
        step.set_status(status);
        Ok(())
    }

    /// The first step, in order, that is not done.
    pub fn next_step(&self) -> Option<&Step> {
        self.steps.iter().find(|step| !step.is_done())
    }

    /// True when no step is left to do. Empty plans are complete.
    pub fn is_completed(&self) -> bool {
        self.next_step().is_none()
    }

    /// Checks that step ids are unique.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::DuplicateStep`] naming the first repeated id.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.steps.len());
        for step in &self.steps {
            if !seen.insert(step.id()) {
                return Err(PlanError::DuplicateStep {
                    id: step.id().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Human-readable markdown rendering of the steps.
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}
