//! Database schema initialization and version checks.

use crate::error::{DatabaseResultExt, PlanError, Result};

/// Version stamped into `PRAGMA user_version` for databases we create.
pub const SCHEMA_VERSION: i64 = 1;

impl super::SqliteStore {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Cascading deletes of steps and criteria rely on this
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.check_schema_version()
    }

    /// Stamps fresh databases and refuses ones written by a newer schema.
    fn check_schema_version(&self) -> Result<()> {
        let version: i64 = self
            .connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .db_context("Failed to read schema version")?;

        if version > SCHEMA_VERSION {
            return Err(PlanError::invalid_input("database").with_reason(format!(
                "Schema version {version} is newer than supported version {SCHEMA_VERSION}"
            )));
        }

        if version < SCHEMA_VERSION {
            self.connection
                .pragma_update(None, "user_version", SCHEMA_VERSION)
                .db_context("Failed to record schema version")?;
        }

        Ok(())
    }
}
