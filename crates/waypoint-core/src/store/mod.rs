//! Durable, per-name persistence of plan records.
//!
//! A [`Store`] maps plan names to full plan records. Two backends are
//! provided:
//!
//! - [`SqliteStore`]: a SQLite database with `plans`, `steps` and
//!   `acceptance_criteria` tables. Each write is one transaction.
//! - [`FileStore`]: a directory holding one `<name>.json` document per plan,
//!   replaced through a temporary file and a rename.
//!
//! Both make `write` and `delete` atomic for a single name: a reader sees
//! either the previous record or the new one, never a mix.

use crate::{
    error::{PlanError, Result},
    models::Plan,
};

pub mod file;
pub mod sqlite;

pub use file::FileStore;
pub use sqlite::SqliteStore;

/// Keyed record storage used by [`PlanManager`](crate::PlanManager).
///
/// Plans returned by [`read`](Store::read) carry no storage name; the manager
/// attaches it.
pub trait Store {
    /// Loads the record stored under `name`.
    ///
    /// # Errors
    ///
    /// [`PlanError::PlanNotFound`] when nothing is stored under `name`,
    /// [`PlanError::MalformedRecord`] when the stored data cannot be parsed,
    /// and a database or file system error when the medium fails.
    fn read(&self, name: &str) -> Result<Plan>;

    /// Replaces whatever is stored under `name` with `plan`.
    fn write(&mut self, name: &str, plan: &Plan) -> Result<()>;

    /// Removes the record stored under `name`.
    ///
    /// # Errors
    ///
    /// [`PlanError::PlanNotFound`] when nothing is stored under `name`.
    fn delete(&mut self, name: &str) -> Result<()>;

    /// Names of every stored plan, sorted.
    fn enumerate(&self) -> Result<Vec<String>>;

    /// Whether a record exists under `name`, readable or not.
    fn exists(&self, name: &str) -> Result<bool> {
        match self.read(name) {
            Ok(_) | Err(PlanError::MalformedRecord { .. }) => Ok(true),
            Err(PlanError::PlanNotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Releases the underlying medium.
    fn close(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}
