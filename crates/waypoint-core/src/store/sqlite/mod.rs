//! SQLite-backed plan store.
//!
//! Plans live in three tables: `plans` (name, id), `steps` (ordered by
//! `step_order`) and `acceptance_criteria` (ordered by `position`). Writes
//! delete and re-insert the whole plan inside one transaction.

use std::path::Path;

use log::debug;
use rusqlite::Connection;

use super::Store;
use crate::{
    error::{DatabaseResultExt, PlanError, Result},
    models::Plan,
};

pub mod plan_queries;
pub mod schema;
pub mod step_queries;

/// Database connection and operations handler.
pub struct SqliteStore {
    connection: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database at `path` and initializes the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("Opening plan database at {}", path.as_ref().display());
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        Self::from_connection(connection)
    }

    /// A private in-memory database, discarded on close.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        Self::from_connection(connection)
    }

    fn from_connection(connection: Connection) -> Result<Self> {
        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }
}

impl Store for SqliteStore {
    fn read(&self, name: &str) -> Result<Plan> {
        self.load_plan(name)?
            .ok_or_else(|| PlanError::plan_not_found(name))
    }

    fn write(&mut self, name: &str, plan: &Plan) -> Result<()> {
        debug!("Writing plan '{name}' ({} steps)", plan.len());
        self.replace_plan(name, plan)
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        debug!("Deleting plan '{name}'");
        self.delete_plan(name)
    }

    fn enumerate(&self) -> Result<Vec<String>> {
        self.plan_names()
    }

    fn exists(&self, name: &str) -> Result<bool> {
        self.plan_exists(name)
    }

    fn close(self: Box<Self>) -> Result<()> {
        self.connection
            .close()
            .map_err(|(_, e)| PlanError::database("Failed to close database").with_source(e))
    }
}
