//! Plan-level record operations.

use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, PlanError, Result},
    models::Plan,
};

const SELECT_PLAN_ID_SQL: &str = "SELECT id FROM plans WHERE name = ?1";
const CHECK_PLAN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plans WHERE name = ?1)";
const SELECT_PLAN_NAMES_SQL: &str = "SELECT name FROM plans ORDER BY name";
const UPSERT_PLAN_SQL: &str =
    "INSERT INTO plans (name, id) VALUES (?1, ?2) ON CONFLICT(name) DO UPDATE SET id = excluded.id";
const DELETE_PLAN_STEPS_SQL: &str = "DELETE FROM steps WHERE plan_name = ?1";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE name = ?1";

impl super::SqliteStore {
    /// Loads a plan and its steps from one read snapshot.
    pub(super) fn load_plan(&self, name: &str) -> Result<Option<Plan>> {
        let tx = self
            .connection
            .unchecked_transaction()
            .db_context("Failed to begin read transaction")?;

        let id: Option<String> = tx
            .query_row(SELECT_PLAN_ID_SQL, params![name], |row| row.get(0))
            .optional()
            .db_context("Failed to query plan")?;

        let Some(id) = id else {
            return Ok(None);
        };

        let steps = Self::load_steps(&tx, name)?;
        tx.commit().db_context("Failed to end read transaction")?;

        Ok(Some(Plan::from_parts(id, steps)))
    }

    /// Replaces the stored plan, steps and criteria in one transaction.
    pub(super) fn replace_plan(&mut self, name: &str, plan: &Plan) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(UPSERT_PLAN_SQL, params![name, plan.id()])
            .db_context("Failed to upsert plan")?;

        // Criteria go with their steps through ON DELETE CASCADE
        tx.execute(DELETE_PLAN_STEPS_SQL, params![name])
            .db_context("Failed to clear plan steps")?;

        Self::insert_steps(&tx, name, plan.steps())?;

        tx.commit().db_context("Failed to commit transaction")
    }

    /// Permanently deletes a plan and all its steps.
    pub(super) fn delete_plan(&mut self, name: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_PLAN_EXISTS_SQL, params![name], |row| row.get(0))
            .db_context("Failed to check plan existence")?;

        if !exists {
            return Err(PlanError::plan_not_found(name));
        }

        tx.execute(DELETE_PLAN_STEPS_SQL, params![name])
            .db_context("Failed to delete plan steps")?;
        tx.execute(DELETE_PLAN_SQL, params![name])
            .db_context("Failed to delete plan")?;

        tx.commit().db_context("Failed to commit transaction")
    }

    pub(super) fn plan_names(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLAN_NAMES_SQL)
            .db_context("Failed to prepare query")?;

        let names = stmt
            .query_map([], |row| row.get(0))
            .db_context("Failed to query plan names")?
            .collect::<std::result::Result<Vec<String>, _>>()
            .db_context("Failed to fetch plan names")?;

        Ok(names)
    }

    pub(super) fn plan_exists(&self, name: &str) -> Result<bool> {
        self.connection
            .query_row(CHECK_PLAN_EXISTS_SQL, params![name], |row| row.get(0))
            .db_context("Failed to check plan existence")
    }
}
