//! Step and acceptance criteria rows.

use std::collections::HashMap;

use rusqlite::{params, Connection};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Step, StepStatus},
};

const SELECT_STEPS_BY_PLAN_SQL: &str =
    "SELECT step_id, description, status FROM steps WHERE plan_name = ?1 ORDER BY step_order";
const SELECT_CRITERIA_BY_PLAN_SQL: &str = "SELECT step_id, criterion FROM acceptance_criteria WHERE plan_name = ?1 ORDER BY step_id, position";
const INSERT_STEP_SQL: &str = "INSERT INTO steps (plan_name, step_id, description, status, step_order) VALUES (?1, ?2, ?3, ?4, ?5)";
const INSERT_CRITERION_SQL: &str = "INSERT INTO acceptance_criteria (plan_name, step_id, position, criterion) VALUES (?1, ?2, ?3, ?4)";

impl super::SqliteStore {
    /// Loads the plan's steps in order, each with its criteria in order.
    pub(super) fn load_steps(conn: &Connection, plan_name: &str) -> Result<Vec<Step>> {
        let mut criteria = Self::load_criteria(conn, plan_name)?;

        let mut stmt = conn
            .prepare(SELECT_STEPS_BY_PLAN_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![plan_name], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .db_context("Failed to query steps")?;

        let mut steps = Vec::new();
        for row in rows {
            let (id, description, status) = row.db_context("Failed to fetch step")?;
            let acceptance = criteria.remove(&id).unwrap_or_default();
            steps.push(Step::from_parts(
                id,
                description,
                StepStatus::from(status),
                acceptance,
            ));
        }

        Ok(steps)
    }

    fn load_criteria(conn: &Connection, plan_name: &str) -> Result<HashMap<String, Vec<String>>> {
        let mut stmt = conn
            .prepare(SELECT_CRITERIA_BY_PLAN_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![plan_name], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })
            .db_context("Failed to query acceptance criteria")?;

        let mut criteria: HashMap<String, Vec<String>> = HashMap::new();
        for row in rows {
            let (step_id, criterion) = row.db_context("Failed to fetch acceptance criterion")?;
            criteria.entry(step_id).or_default().push(criterion);
        }

        Ok(criteria)
    }

    /// Inserts `steps` in order. Callers clear the previous rows first.
    pub(super) fn insert_steps(conn: &Connection, plan_name: &str, steps: &[Step]) -> Result<()> {
        let mut insert_step = conn
            .prepare_cached(INSERT_STEP_SQL)
            .db_context("Failed to prepare step insert")?;
        let mut insert_criterion = conn
            .prepare_cached(INSERT_CRITERION_SQL)
            .db_context("Failed to prepare criterion insert")?;

        for (order, step) in steps.iter().enumerate() {
            insert_step
                .execute(params![
                    plan_name,
                    step.id(),
                    step.description(),
                    step.status().as_str(),
                    order as i64
                ])
                .db_context("Failed to insert step")?;

            for (position, criterion) in step.acceptance().iter().enumerate() {
                insert_criterion
                    .execute(params![plan_name, step.id(), position as i64, criterion])
                    .db_context("Failed to insert acceptance criterion")?;
            }
        }

        Ok(())
    }
}
