//! High-level API for creating, loading, saving and compacting plans.
//!
//! [`PlanManager`] sits between callers and a [`Store`]. It is the only place
//! that assigns a plan's storage name, and the only bridge from in-memory
//! edits to durable state:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Caller      │    │   PlanManager   │    │      Store      │
//! │ (edits a Plan)  │───▶│ create/get/save │───▶│ read/write/...  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use waypoint_core::{PlanManager, SqliteStore};
//!
//! # fn example() -> waypoint_core::Result<()> {
//! let mut manager = PlanManager::new(SqliteStore::open_in_memory()?);
//!
//! let mut plan = manager.create("release")?;
//! plan.add_step("tag", "Tag the release", vec![])?;
//! manager.save(&plan)?;
//!
//! let mut plan = manager.get("release")?;
//! plan.mark_as_completed("tag")?;
//! manager.save(&plan)?;
//!
//! assert_eq!(manager.compact()?, vec!["release".to_string()]);
//! manager.close()
//! # }
//! # example().unwrap();
//! ```

use log::{info, warn};

use crate::{
    display::PlanSummaries,
    error::{PlanError, Result},
    models::{Plan, PlanSummary},
    store::Store,
};

pub mod builder;


pub use builder::{Backend, PlanManagerBuilder};

/// Main interface for managing stored plans.
pub struct PlanManager {
    store: Box<dyn Store>,
}

impl PlanManager {
    /// Wraps an opened store.
    pub fn new(store: impl Store + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Returns a new, empty, not yet persisted plan named `name`.
    ///
    /// # Errors
    ///
    /// [`PlanError::PlanAlreadyExists`] if a record is stored under `name`,
    /// [`PlanError::InvalidInput`] if `name` is not a valid plan name.
    pub fn create(&self, name: &str) -> Result<Plan> {
        validate_plan_name(name)?;

        if self.store.exists(name)? {
            return Err(PlanError::PlanAlreadyExists {
                name: name.to_string(),
            });
        }

        Ok(Plan::new(name))
    }

    /// Loads the plan stored under `name`.
    ///
    /// # Errors
    ///
    /// [`PlanError::PlanNotFound`] if nothing is stored under `name` and
    /// [`PlanError::MalformedRecord`] if the record cannot be parsed.
    pub fn get(&self, name: &str) -> Result<Plan> {
        validate_plan_name(name)?;
        Ok(self.store.read(name)?.with_name(name))
    }

    /// Replaces the stored record for `plan.name()` with the plan's full state.
    ///
    /// # Errors
    ///
    /// [`PlanError::InvalidInput`] for a plan without a storage name and
    /// [`PlanError::DuplicateStep`] if two steps share an id.
    pub fn save(&mut self, plan: &Plan) -> Result<()> {
        if plan.name().is_empty() {
            return Err(PlanError::invalid_input("name")
                .with_reason("Plan has no storage name; obtain it from create or get"));
        }
        validate_plan_name(plan.name())?;
        plan.validate()?;

        self.store.write(plan.name(), plan)
    }

    /// Summaries of every stored plan.
    ///
    /// Plans that fail to load are logged and skipped.
    ///
    /// # Errors
    ///
    /// Fails only if the store cannot be enumerated.
    pub fn list(&self) -> Result<PlanSummaries> {
        let mut summaries = Vec::new();
        for name in self.store.enumerate()? {
            match self.get(&name) {
                Ok(plan) => summaries.push(PlanSummary::from(&plan)),
                Err(e) => warn!("Skipping plan '{name}' while listing: {e}"),
            }
        }
        Ok(PlanSummaries(summaries))
    }

    /// Deletes every stored plan whose steps are all done.
    ///
    /// Plans that fail to load or delete are logged and skipped. Returns the
    /// names of the plans removed.
    ///
    /// # Errors
    ///
    /// Fails only if the store cannot be enumerated.
    pub fn compact(&mut self) -> Result<Vec<String>> {
        let mut removed = Vec::new();
        for name in self.store.enumerate()? {
            let plan = match self.get(&name) {
                Ok(plan) => plan,
                Err(e) => {
                    warn!("Skipping plan '{name}' during compaction: {e}");
                    continue;
                }
            };

            if !plan.is_completed() {
                continue;
            }

            match self.store.delete(&name) {
                Ok(()) => {
                    info!("Compacted completed plan '{name}'");
                    removed.push(name);
                }
                Err(e) => warn!("Failed to delete completed plan '{name}': {e}"),
            }
        }
        Ok(removed)
    }

    /// Releases the store.
    pub fn close(self) -> Result<()> {
        self.store.close()
    }
}

/// Plan names double as file names for the file store, so they are kept to
/// a single safe path component.
pub fn validate_plan_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "Plan name must not be empty"
    } else if name.starts_with('.') {
        "Plan name must not start with '.'"
    } else if name.contains(['/', '\\', '\0']) {
        "Plan name must not contain path separators or NUL"
    } else {
        return Ok(());
    };

    Err(PlanError::invalid_input("name").with_reason(reason))
}
