#![allow(dead_code)]

use tempfile::TempDir;
use waypoint_core::{Backend, PlanManager, PlanManagerBuilder};

/// Backends every persistence test runs against.
pub const BACKENDS: [Backend; 2] = [Backend::Sqlite, Backend::Files];

/// Helper function to create a test manager in a scratch directory
pub fn create_test_manager(backend: Backend) -> (TempDir, PlanManager) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let manager = open_manager(&temp_dir, backend);
    (temp_dir, manager)
}

/// Opens a manager over the storage inside `temp_dir`, reusing existing data
pub fn open_manager(temp_dir: &TempDir, backend: Backend) -> PlanManager {
    PlanManagerBuilder::new()
        .with_backend(backend)
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_plan_directory(Some(temp_dir.path().join("plans")))
        .build()
        .expect("Failed to create manager")
}

pub fn step_ids(plan: &waypoint_core::Plan) -> Vec<String> {
    plan.steps().iter().map(|step| step.id().to_string()).collect()
}
